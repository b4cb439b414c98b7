use criterion::{BenchmarkId, Criterion};
use orderlog_rs::{OrderStore, StoreConfig};
use pricelevel::Side;
use std::hint::black_box;

/// Register benchmarks for the two-pass match over a filled store
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("OrderStore - Match Pass");

    for order_count in [100, 1_000, 10_000].iter() {
        let store = populate_store(*order_count);
        group.bench_with_input(
            BenchmarkId::new("run_match_pass", order_count),
            &store,
            |b, store| {
                b.iter(|| black_box(store.run_match_pass()));
            },
        );
    }

    group.finish();
}

// Alternate sells and buys over 1024 tickers; buys sit just above their ticker's sells
fn populate_store(order_count: usize) -> OrderStore {
    let store = OrderStore::new(StoreConfig::new(order_count, 1024).unwrap()).unwrap();
    for i in 0..order_count {
        let ticker = ((i / 2) % 1024) as u32;
        let offset = (i % 7) as f64;
        if i % 2 == 0 {
            let _ = store.submit(Side::Sell, ticker, 10, 100.0 + offset);
        } else {
            let _ = store.submit(Side::Buy, ticker, 10, 103.0 + offset);
        }
    }
    store
}
