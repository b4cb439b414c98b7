//! OrderStore implementation: a fixed-capacity order log and the batch match pass over it.

pub mod book;
mod config;
mod error;
mod operations;
mod order;
mod snapshot;

pub mod matching;

pub use book::OrderStore;
pub use config::{MAX_ORDERS, NUM_TICKERS, StoreConfig};
pub use error::OrderStoreError;
pub use matching::{LowestSells, match_orders};
pub use order::{Match, Order, OrderId};
pub use snapshot::{MatchReport, OrderStoreSnapshot};
