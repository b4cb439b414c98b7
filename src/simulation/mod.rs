//! Synthetic producer pool that feeds an [`OrderStore`] and then runs the match pass.
//!
//! Producers run on their own threads, released together by a barrier. Each one submits
//! a fixed number of random orders, sleeping a random pause between submissions. The
//! match pass only starts once every producer has been joined.

mod config;
mod generator;

pub use config::SimulationConfig;
pub use generator::{OrderGenerator, OrderRequest};

use crate::report;
use crate::store::{Match, OrderStore, OrderStoreError};
use std::ops::AddAssign;
use std::sync::{Arc, Barrier};
use std::thread;
use tracing::{debug, info, warn};

/// Submission outcomes counted by producers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProducerStats {
    /// Submissions attempted
    pub submitted: usize,
    /// Submissions written into the store
    pub accepted: usize,
    /// Submissions dropped because the store was full
    pub rejected: usize,
    /// Submissions refused for bad parameters
    pub invalid: usize,
}

impl AddAssign for ProducerStats {
    fn add_assign(&mut self, other: Self) {
        self.submitted += other.submitted;
        self.accepted += other.accepted;
        self.rejected += other.rejected;
        self.invalid += other.invalid;
    }
}

/// Everything a finished simulation produced
#[derive(Debug)]
pub struct SimulationOutcome {
    /// The frozen store
    pub store: Arc<OrderStore>,
    /// Totals across all producers
    pub stats: ProducerStats,
    /// Output of the match pass
    pub matches: Vec<Match>,
}

/// Submit `config.orders_per_producer` orders from one producer.
///
/// Tickers are drawn from the universe of `store`. Fails before submitting anything
/// when `config` is invalid.
pub fn run_producer(
    store: &OrderStore,
    config: &SimulationConfig,
    producer: usize,
) -> Result<ProducerStats, OrderStoreError> {
    let mut generator = OrderGenerator::new(config, store.num_tickers(), producer)?;
    let mut stats = ProducerStats::default();

    for _ in 0..config.orders_per_producer {
        let request = generator.next_order();
        stats.submitted += 1;
        match store.submit(request.side, request.ticker, request.quantity, request.price) {
            Ok(_) => stats.accepted += 1,
            Err(OrderStoreError::CapacityExceeded { .. }) => stats.rejected += 1,
            Err(err) => {
                warn!("Producer {}: order refused: {}", producer, err);
                stats.invalid += 1;
            }
        }

        let pause = generator.next_latency();
        if !pause.is_zero() {
            thread::sleep(pause);
        }
    }

    debug!("Producer {} finished: {:?}", producer, stats);
    Ok(stats)
}

/// Run every producer on its own thread against `store` and wait for all of them.
///
/// The config is validated before any thread is spawned.
pub fn run_producers(
    store: &Arc<OrderStore>,
    config: &SimulationConfig,
) -> Result<ProducerStats, OrderStoreError> {
    config.validate()?;
    let barrier = Arc::new(Barrier::new(config.producers));
    let mut handles = Vec::with_capacity(config.producers);

    for producer in 0..config.producers {
        let thread_store = Arc::clone(store);
        let thread_barrier = Arc::clone(&barrier);
        let thread_config = config.clone();

        handles.push(thread::spawn(move || {
            thread_barrier.wait();
            run_producer(&thread_store, &thread_config, producer)
        }));
    }

    let mut totals = ProducerStats::default();
    for handle in handles {
        match handle.join() {
            Ok(stats) => totals += stats?,
            Err(panic) => std::panic::resume_unwind(panic),
        }
    }
    Ok(totals)
}

/// Build a store, fill it from the producer pool, then run the match pass once.
///
/// Reports the total order count, the match count and every match.
pub fn run_simulation(config: &SimulationConfig) -> Result<SimulationOutcome, OrderStoreError> {
    config.validate()?;
    info!(
        "Simulation: {} producers x {} orders, capacity {}, {} tickers",
        config.producers,
        config.orders_per_producer,
        config.store.capacity,
        config.store.num_tickers
    );

    let store = Arc::new(OrderStore::new(config.store)?);
    let stats = run_producers(&store, config)?;

    report::total_orders(store.len());
    let matches = store.run_match_pass();
    report::matches(&matches);

    Ok(SimulationOutcome {
        store,
        stats,
        matches,
    })
}
