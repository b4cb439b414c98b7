//! Serializable views of the order store and of a match pass

use super::book::OrderStore;
use super::error::OrderStoreError;
use super::order::{Match, Order};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::trace;
use uuid::Uuid;

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or_default()
}

/// A copy of the order store contents at a specific point in time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStoreSnapshot {
    /// Identifier of the store the snapshot was taken from
    pub store_id: Uuid,

    /// Timestamp when the snapshot was created (milliseconds since epoch)
    pub timestamp: u64,

    /// Capacity of the store
    pub capacity: usize,

    /// Size of the ticker universe
    pub num_tickers: u32,

    /// Orders accepted into the store
    pub accepted: usize,

    /// Submissions dropped because the store was full
    pub rejected: u64,

    /// Written orders, in slot order
    pub orders: Vec<Order>,
}

impl OrderStoreSnapshot {
    /// Number of buy orders in the snapshot
    pub fn buy_count(&self) -> usize {
        self.orders.iter().filter(|order| order.is_buy()).count()
    }

    /// Number of sell orders in the snapshot
    pub fn sell_count(&self) -> usize {
        self.orders.iter().filter(|order| order.is_sell()).count()
    }

    /// Sum of quantities across all orders
    pub fn total_quantity(&self) -> u64 {
        let quantity = self.orders.iter().map(|order| order.quantity).sum();
        trace!("total_quantity: {:?}", quantity);
        quantity
    }

    /// Encode as JSON
    pub fn to_json(&self) -> Result<String, OrderStoreError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode from JSON
    pub fn from_json(json: &str) -> Result<Self, OrderStoreError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Output of one match pass together with the order count it ran over
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    /// Identifier of the store that was matched
    pub store_id: Uuid,

    /// Timestamp when the pass finished (milliseconds since epoch)
    pub timestamp: u64,

    /// Accepted orders the pass scanned
    pub total_orders: usize,

    /// Matches in ascending buy slot order
    pub matches: Vec<Match>,
}

impl MatchReport {
    /// Number of distinct sell orders that were matched at least once
    pub fn distinct_sells(&self) -> usize {
        let mut sells: Vec<u64> = self.matches.iter().map(|m| m.sell.order_id).collect();
        sells.sort_unstable();
        sells.dedup();
        sells.len()
    }

    /// Encode as JSON
    pub fn to_json(&self) -> Result<String, OrderStoreError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode from JSON
    pub fn from_json(json: &str) -> Result<Self, OrderStoreError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl OrderStore {
    /// Create a snapshot of the current store contents
    pub fn create_snapshot(&self) -> OrderStoreSnapshot {
        OrderStoreSnapshot {
            store_id: self.id,
            timestamp: now_millis(),
            capacity: self.config.capacity,
            num_tickers: self.config.num_tickers,
            accepted: self.len(),
            rejected: self.rejected(),
            orders: self.orders().copied().collect(),
        }
    }

    /// Run the match pass and bundle its result for export
    pub fn match_report(&self) -> MatchReport {
        let matches = self.run_match_pass();
        MatchReport {
            store_id: self.id,
            timestamp: now_millis(),
            total_orders: self.len(),
            matches,
        }
    }
}
