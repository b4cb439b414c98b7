use orderlog_rs::{SimulationConfig, StoreConfig, run_simulation};
use pricelevel::setup_logger;
use tracing::{error, info};

// Number of producer threads
const PRODUCERS: usize = 8;
// Submissions per producer
const ORDERS_PER_PRODUCER: usize = 500;
// Slots in the store, well below the total submissions
const CAPACITY: usize = 1_000;
// Small ticker universe so most buys find a sell
const TICKERS: u32 = 16;

fn main() {
    setup_logger();
    info!("Capacity Pressure Test");
    info!("----------------------");

    let store = match StoreConfig::new(CAPACITY, TICKERS) {
        Ok(store) => store,
        Err(err) => {
            error!("Invalid store configuration: {}", err);
            return;
        }
    };
    let config = SimulationConfig::default()
        .with_producers(PRODUCERS)
        .with_orders_per_producer(ORDERS_PER_PRODUCER)
        .with_store(store)
        .with_latency_ms(0, 1)
        .with_seed(42);

    let outcome = match run_simulation(&config) {
        Ok(outcome) => outcome,
        Err(err) => {
            error!("Simulation failed: {}", err);
            return;
        }
    };

    let snapshot = outcome.store.create_snapshot();
    info!("Submitted: {}", outcome.stats.submitted);
    info!("Accepted: {}", snapshot.accepted);
    info!("Rejected: {}", snapshot.rejected);
    info!(
        "Buys: {} Sells: {} Total quantity: {}",
        snapshot.buy_count(),
        snapshot.sell_count(),
        snapshot.total_quantity()
    );

    let report = outcome.store.match_report();
    info!(
        "{} matches against {} distinct sells",
        report.matches.len(),
        report.distinct_sells()
    );
    match report.to_json() {
        Ok(json) => info!("Match report: {} bytes of JSON", json.len()),
        Err(err) => error!("Could not encode match report: {}", err),
    }
}
