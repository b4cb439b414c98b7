//! # Lock-Free Order Log with Batch Matching
//!
//! A minimal simulated exchange core. Many producer threads append buy and sell orders
//! for a fixed universe of tickers into a shared, fixed-capacity order log. Once every
//! producer has finished, a single matching pass scans the log and pairs each buy order
//! with the cheapest sell order of its ticker.
//!
//! ## Key Features
//!
//! - **Lock-Free Slot Allocation**: each submission claims its slot with one relaxed
//!   atomic `fetch_add`. No two producers ever receive the same slot, no claim is lost,
//!   and the claimant is the only writer of its slot.
//!
//! - **Write-Once Slots**: the log is a buffer allocated once at construction. A slot is
//!   either empty or holds a complete order; a partially written entry is never observable.
//!
//! - **Admission Control**: once capacity is exhausted further submissions are dropped
//!   and surfaced as [`OrderStoreError::CapacityExceeded`]. Bad parameters (ticker out of
//!   range, zero quantity, non-positive price) are refused before a slot is claimed.
//!
//! - **Two-Pass Matching**: the first pass records the lowest sell price per ticker (the
//!   earliest slot wins ties), the second pairs every buy priced at or above it.
//!
//! - **Snapshots**: store contents and match passes export to JSON.
//!
//! ## Matching Semantics
//!
//! The match pass is a single-shot batch over a frozen log, not a continuous engine:
//!
//! 1. A sell order is never consumed. The same cheapest sell may be paired with any
//!    number of buys.
//! 2. Quantities are carried on every order but never decremented.
//! 3. Matches are emitted in ascending slot order of the buy order.
//! 4. The pass cannot fail; an empty log yields no matches.
//!
//! ## Concurrency Model
//!
//! Producers share the store through an `Arc` and only ever call
//! [`OrderStore::submit`]. The match pass must run after all producers have been joined;
//! nothing synchronizes matching with ingestion. Acknowledgment lines go through a mutex
//! so concurrent reports never interleave. The mutex guards the report, not the write.
//!
//! ## Example
//!
//! ```rust
//! use orderlog_rs::{OrderStore, StoreConfig};
//! use pricelevel::Side;
//!
//! let store = OrderStore::new(StoreConfig::new(16, 8).unwrap()).unwrap();
//! store.submit(Side::Sell, 5, 10, 30.0).unwrap();
//! store.submit(Side::Sell, 5, 10, 20.0).unwrap();
//! store.submit(Side::Buy, 5, 10, 25.0).unwrap();
//!
//! let matches = store.run_match_pass();
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].sell.order_id, 1);
//! ```
//!
//! ## Status
//! This project is a simulation core and is not suitable for production trading.

pub mod simulation;
pub mod store;

pub mod report;

pub use simulation::{SimulationConfig, SimulationOutcome, run_simulation};
pub use store::{
    LowestSells, MAX_ORDERS, Match, MatchReport, NUM_TICKERS, Order, OrderId, OrderStore,
    OrderStoreError, OrderStoreSnapshot, StoreConfig, match_orders,
};
