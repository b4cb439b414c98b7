//! Random source of synthetic orders

use super::config::SimulationConfig;
use crate::store::OrderStoreError;
use pricelevel::Side;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

/// Parameters of one order before it has been given a slot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderRequest {
    pub side: Side,
    pub ticker: u32,
    pub quantity: u64,
    pub price: f64,
}

/// Draws uniformly distributed orders and inter-submission pauses for one producer.
#[derive(Debug)]
pub struct OrderGenerator {
    rng: StdRng,
    num_tickers: u32,
    quantity: (u64, u64),
    price: (f64, f64),
    latency_ms: (u64, u64),
}

impl OrderGenerator {
    /// Generator for producer number `producer` drawing tickers in `[0, num_tickers)`,
    /// seeded from `config.seed` when set.
    ///
    /// Fails when the config does not pass [`SimulationConfig::validate`] or the ticker
    /// universe is empty, so no draw can hit an empty range.
    pub fn new(
        config: &SimulationConfig,
        num_tickers: u32,
        producer: usize,
    ) -> Result<Self, OrderStoreError> {
        config.validate()?;
        if num_tickers == 0 {
            return Err(OrderStoreError::InvalidConfig {
                message: "num_tickers must be greater than zero".to_string(),
            });
        }
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(producer as u64)),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            rng,
            num_tickers,
            quantity: (config.min_quantity, config.max_quantity),
            price: (config.min_price, config.max_price),
            latency_ms: (config.min_latency_ms, config.max_latency_ms),
        })
    }

    /// Draw the next order
    pub fn next_order(&mut self) -> OrderRequest {
        let side = if self.rng.gen_bool(0.5) {
            Side::Buy
        } else {
            Side::Sell
        };
        OrderRequest {
            side,
            ticker: self.rng.gen_range(0..self.num_tickers),
            quantity: self.rng.gen_range(self.quantity.0..=self.quantity.1),
            price: self.rng.gen_range(self.price.0..self.price.1),
        }
    }

    /// Draw the pause before the next submission
    pub fn next_latency(&mut self) -> Duration {
        Duration::from_millis(self.rng.gen_range(self.latency_ms.0..=self.latency_ms.1))
    }
}
