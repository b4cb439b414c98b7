use criterion::criterion_group;

mod contention;

pub use contention::register_contention_benchmarks as register_benchmarks;

// Import and re-export our main concurrent benchmarks
criterion_group!(concurrent_benches, register_benchmarks);
