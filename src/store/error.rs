//! Order store error types

use std::fmt;

/// Errors that can occur within the OrderStore
#[derive(Debug, Clone, PartialEq)]
pub enum OrderStoreError {
    /// The claimed slot index is beyond the store capacity; the order was dropped
    CapacityExceeded {
        /// Fixed capacity of the store
        capacity: usize,
        /// Slot index handed out by the counter
        index: u64,
    },

    /// Ticker outside the configured universe
    InvalidTicker {
        /// Ticker supplied by the caller
        ticker: u32,
        /// Size of the ticker universe
        num_tickers: u32,
    },

    /// Quantity must be strictly positive
    InvalidQuantity {
        /// Quantity supplied by the caller
        quantity: u64,
    },

    /// Price must be finite and strictly positive
    InvalidPrice {
        /// Price supplied by the caller
        price: f64,
    },

    /// Rejected configuration value
    InvalidConfig {
        /// Description of the error
        message: String,
    },

    /// JSON encoding or decoding failed
    Serialization {
        /// Description of the error
        message: String,
    },
}

impl fmt::Display for OrderStoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStoreError::CapacityExceeded { capacity, index } => {
                write!(
                    f,
                    "Capacity exceeded: slot {} is beyond capacity {}",
                    index, capacity
                )
            }
            OrderStoreError::InvalidTicker {
                ticker,
                num_tickers,
            } => {
                write!(
                    f,
                    "Invalid ticker: {} is outside [0, {})",
                    ticker, num_tickers
                )
            }
            OrderStoreError::InvalidQuantity { quantity } => {
                write!(f, "Invalid quantity: {}", quantity)
            }
            OrderStoreError::InvalidPrice { price } => write!(f, "Invalid price: {}", price),
            OrderStoreError::InvalidConfig { message } => {
                write!(f, "Invalid configuration: {}", message)
            }
            OrderStoreError::Serialization { message } => {
                write!(f, "Serialization error: {}", message)
            }
        }
    }
}

impl std::error::Error for OrderStoreError {}

impl From<serde_json::Error> for OrderStoreError {
    fn from(err: serde_json::Error) -> Self {
        OrderStoreError::Serialization {
            message: err.to_string(),
        }
    }
}

impl OrderStoreError {
    /// True for the non-fatal admission-control rejection
    pub fn is_capacity_exceeded(&self) -> bool {
        matches!(self, OrderStoreError::CapacityExceeded { .. })
    }
}
