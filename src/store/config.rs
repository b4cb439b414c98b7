//! Sizing of the order store

use super::error::OrderStoreError;
use serde::{Deserialize, Serialize};

/// Default number of slots in the order store
pub const MAX_ORDERS: usize = 10_000;

/// Default size of the ticker universe
pub const NUM_TICKERS: u32 = 1024;

/// Fixed dimensions of an [`OrderStore`](super::OrderStore), decided once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Maximum number of orders the store will ever accept
    pub capacity: usize,

    /// Tickers are valid in `[0, num_tickers)`
    pub num_tickers: u32,
}

impl StoreConfig {
    /// Create a validated configuration
    pub fn new(capacity: usize, num_tickers: u32) -> Result<Self, OrderStoreError> {
        let config = Self {
            capacity,
            num_tickers,
        };
        config.validate()?;
        Ok(config)
    }

    /// Override the capacity
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Override the ticker universe size
    pub fn with_num_tickers(mut self, num_tickers: u32) -> Self {
        self.num_tickers = num_tickers;
        self
    }

    /// Check that both dimensions are non-zero
    pub fn validate(&self) -> Result<(), OrderStoreError> {
        if self.capacity == 0 {
            return Err(OrderStoreError::InvalidConfig {
                message: "capacity must be greater than zero".to_string(),
            });
        }
        if self.num_tickers == 0 {
            return Err(OrderStoreError::InvalidConfig {
                message: "num_tickers must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            capacity: MAX_ORDERS,
            num_tickers: NUM_TICKERS,
        }
    }
}
