use orderlog_rs::{SimulationConfig, run_simulation};
use pricelevel::setup_logger;
use tracing::{error, info};

fn main() {
    // Set up logging
    setup_logger();

    // Six producers, fifty orders each, 5-50 ms between submissions
    let config = SimulationConfig::default();
    info!("Exchange Simulation");
    info!("-------------------");
    info!("Producers: {}", config.producers);
    info!("Orders per producer: {}", config.orders_per_producer);
    info!("Capacity: {}", config.store.capacity);
    info!("Tickers: {}", config.store.num_tickers);

    match run_simulation(&config) {
        Ok(outcome) => {
            info!(
                "Accepted {} of {} submissions ({} rejected)",
                outcome.stats.accepted, outcome.stats.submitted, outcome.stats.rejected
            );
        }
        Err(err) => error!("Simulation failed: {}", err),
    }
}
