use criterion::{BenchmarkId, Criterion};
use orderlog_rs::{OrderStore, StoreConfig};
use pricelevel::Side;
use std::hint::black_box;

/// Register all benchmarks for submitting orders from a single thread
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("OrderStore - Submit Orders");

    group.bench_function("submit_alternating_sides", |b| {
        b.iter(|| {
            let store = OrderStore::new(StoreConfig::new(100, 16).unwrap()).unwrap();
            for i in 0..100u32 {
                let side = if i % 2 == 0 { Side::Buy } else { Side::Sell };
                let _ = black_box(store.submit(side, i % 16, 10, 100.0 + i as f64));
            }
        })
    });

    // Every submission past capacity takes the rejection path
    group.bench_function("submit_when_full", |b| {
        let store = OrderStore::new(StoreConfig::new(1, 1).unwrap()).unwrap();
        let _ = store.submit(Side::Buy, 0, 1, 1.0);
        b.iter(|| {
            let _ = black_box(store.submit(Side::Sell, 0, 1, 1.0));
        })
    });

    // Parametrized benchmark with different order counts
    for order_count in [10, 100, 1000].iter() {
        group.bench_with_input(
            BenchmarkId::new("order_count_scaling", order_count),
            order_count,
            |b, &order_count| {
                b.iter(|| {
                    let store =
                        OrderStore::new(StoreConfig::new(order_count, 1024).unwrap()).unwrap();
                    for i in 0..order_count {
                        let _ = black_box(store.submit(
                            Side::Buy,
                            (i % 1024) as u32,
                            10,
                            1000.0,
                        ));
                    }
                })
            },
        );
    }

    group.finish();
}
