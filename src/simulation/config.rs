//! Producer pool settings

use crate::store::{OrderStoreError, StoreConfig};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Everything a simulation run needs, fixed at process start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of producer threads
    pub producers: usize,

    /// Submissions made by each producer
    pub orders_per_producer: usize,

    /// Dimensions of the store the producers write into
    pub store: StoreConfig,

    /// Smallest generated quantity (inclusive)
    pub min_quantity: u64,

    /// Largest generated quantity (inclusive)
    pub max_quantity: u64,

    /// Lower bound of generated prices (inclusive)
    pub min_price: f64,

    /// Upper bound of generated prices (exclusive)
    pub max_price: f64,

    /// Shortest pause between two submissions of one producer, in milliseconds
    pub min_latency_ms: u64,

    /// Longest pause between two submissions of one producer, in milliseconds
    pub max_latency_ms: u64,

    /// Base seed; producer `i` uses `seed + i`. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            producers: 6,
            orders_per_producer: 50,
            store: StoreConfig::default(),
            min_quantity: 1,
            max_quantity: 1000,
            min_price: 1.0,
            max_price: 1000.0,
            min_latency_ms: 5,
            max_latency_ms: 50,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Set the number of producers
    pub fn with_producers(mut self, producers: usize) -> Self {
        self.producers = producers;
        self
    }

    /// Set the submissions per producer
    pub fn with_orders_per_producer(mut self, orders: usize) -> Self {
        self.orders_per_producer = orders;
        self
    }

    /// Set the store dimensions
    pub fn with_store(mut self, store: StoreConfig) -> Self {
        self.store = store;
        self
    }

    /// Set the pause range between submissions
    pub fn with_latency_ms(mut self, min: u64, max: u64) -> Self {
        self.min_latency_ms = min;
        self.max_latency_ms = max;
        self
    }

    /// Fix the base seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Total submissions across all producers
    pub fn total_submissions(&self) -> usize {
        self.producers.saturating_mul(self.orders_per_producer)
    }

    /// Pause range as durations
    pub fn latency_range(&self) -> (Duration, Duration) {
        (
            Duration::from_millis(self.min_latency_ms),
            Duration::from_millis(self.max_latency_ms),
        )
    }

    /// Check that every range is usable by the generator
    pub fn validate(&self) -> Result<(), OrderStoreError> {
        self.store.validate()?;
        if self.producers == 0 {
            return Err(invalid("producers must be greater than zero"));
        }
        if self.min_quantity == 0 || self.min_quantity > self.max_quantity {
            return Err(invalid("quantity range must be positive and non-empty"));
        }
        if !(self.min_price.is_finite() && self.max_price.is_finite())
            || self.min_price <= 0.0
            || self.min_price >= self.max_price
        {
            return Err(invalid("price range must be positive and non-empty"));
        }
        if self.min_latency_ms > self.max_latency_ms {
            return Err(invalid("latency range must be non-empty"));
        }
        Ok(())
    }

    /// Load a configuration from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, OrderStoreError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

fn invalid(message: &str) -> OrderStoreError {
    OrderStoreError::InvalidConfig {
        message: message.to_string(),
    }
}
