use criterion::{BenchmarkId, Criterion};
use orderlog_rs::{OrderStore, StoreConfig};
use pricelevel::Side;
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::{Duration, Instant};

// Upper bound on allocated slots; later submissions take the rejection path
const MAX_BENCH_CAPACITY: usize = 1 << 20;

/// Register benchmarks that contend on the slot counter
pub fn register_contention_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("OrderStore - Contention Patterns");

    for thread_count in [1, 2, 4, 8].iter() {
        group.bench_with_input(
            BenchmarkId::new("concurrent_submit", thread_count),
            thread_count,
            |b, &thread_count| {
                b.iter_custom(|iters| measure_submit_contention(thread_count, iters));
            },
        );
    }

    // Store already full: only the counter and the capacity check are exercised
    for thread_count in [2, 8].iter() {
        group.bench_with_input(
            BenchmarkId::new("concurrent_rejection", thread_count),
            thread_count,
            |b, &thread_count| {
                b.iter_custom(|iters| measure_rejection_contention(thread_count, iters));
            },
        );
    }

    group.finish();
}

/// Measures time for `thread_count` producers each submitting `iterations` orders
fn measure_submit_contention(thread_count: usize, iterations: u64) -> Duration {
    let capacity = (thread_count as u64 * iterations).clamp(1, MAX_BENCH_CAPACITY as u64);
    let config = StoreConfig::new(capacity as usize, 1024).unwrap();
    let store = Arc::new(OrderStore::new(config).unwrap());
    run_producers(store, thread_count, iterations)
}

/// Measures time for submissions against a store that has no free slot
fn measure_rejection_contention(thread_count: usize, iterations: u64) -> Duration {
    let store = Arc::new(OrderStore::new(StoreConfig::new(1, 1024).unwrap()).unwrap());
    let _ = store.submit(Side::Buy, 0, 1, 1.0);
    run_producers(store, thread_count, iterations)
}

fn run_producers(store: Arc<OrderStore>, thread_count: usize, iterations: u64) -> Duration {
    let barrier = Arc::new(Barrier::new(thread_count + 1)); // +1 for main thread
    let mut handles = Vec::with_capacity(thread_count);

    for thread_id in 0..thread_count {
        let thread_store = Arc::clone(&store);
        let thread_barrier = Arc::clone(&barrier);

        handles.push(thread::spawn(move || {
            // Wait for all threads to be ready
            thread_barrier.wait();

            for i in 0..iterations {
                let side = if (thread_id as u64 + i) % 2 == 0 {
                    Side::Buy
                } else {
                    Side::Sell
                };
                let ticker = ((thread_id as u64 * 31 + i) % 1024) as u32;
                let _ = thread_store.submit(side, ticker, 10, 100.0 + (i % 50) as f64);
            }

            // Signal completion
            thread_barrier.wait();
        }));
    }

    // Start timing
    barrier.wait();
    let start = Instant::now();

    // Wait for all threads to complete
    barrier.wait();
    let duration = start.elapsed();

    // Join all threads
    for handle in handles {
        let _ = handle.join();
    }

    duration
}
