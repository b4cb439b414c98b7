//! Core OrderStore implementation: a fixed-capacity, append-only order log

use super::config::StoreConfig;
use super::error::OrderStoreError;
use super::order::{Order, OrderId};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, OnceLock};
use tracing::trace;
use uuid::Uuid;

/// The OrderStore is a pre-allocated log that many producers append to concurrently.
///
/// Each submission claims a slot index from a single atomic counter. The claimant is the
/// only writer of that slot, and a slot is written at most once, so the buffer itself needs
/// no lock. Readers (the match pass) are expected to run once every producer has finished.
pub struct OrderStore {
    /// Identifier of this store, carried into snapshots and log lines
    pub(super) id: Uuid,

    /// Capacity and ticker universe
    pub(super) config: StoreConfig,

    /// Write-once cells, sized once at construction. An empty cell is never read as an order.
    pub(super) slots: Box<[OnceLock<Order>]>,

    /// Next slot index to hand out. Runs past capacity when submissions are rejected.
    pub(super) count: AtomicU64,

    /// Serializes acknowledgment lines so concurrent reports never interleave
    pub(super) report_lock: Mutex<()>,
}

impl OrderStore {
    /// Create a new order store with the given dimensions
    pub fn new(config: StoreConfig) -> Result<Self, OrderStoreError> {
        config.validate()?;

        let slots = (0..config.capacity).map(|_| OnceLock::new()).collect();
        let id = Uuid::new_v4();
        trace!(
            "Order store {}: allocated {} slots for {} tickers",
            id, config.capacity, config.num_tickers
        );

        Ok(Self {
            id,
            config,
            slots,
            count: AtomicU64::new(0),
            report_lock: Mutex::new(()),
        })
    }

    /// Create a store with the given capacity and the default ticker universe
    pub fn with_capacity(capacity: usize) -> Result<Self, OrderStoreError> {
        Self::new(StoreConfig::default().with_capacity(capacity))
    }

    /// Get the identifier of this store
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Get the dimensions this store was built with
    pub fn config(&self) -> StoreConfig {
        self.config
    }

    /// Maximum number of orders this store accepts
    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    /// Size of the ticker universe
    pub fn num_tickers(&self) -> u32 {
        self.config.num_tickers
    }

    /// Raw value of the slot counter: accepted plus capacity rejections
    pub fn claimed(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }

    /// Number of accepted orders
    pub fn len(&self) -> usize {
        let claimed = self.claimed();
        if claimed >= self.config.capacity as u64 {
            self.config.capacity
        } else {
            claimed as usize
        }
    }

    /// True when nothing has been accepted yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True once every slot has been handed out
    pub fn is_full(&self) -> bool {
        self.len() == self.config.capacity
    }

    /// Number of submissions dropped because the store was full
    pub fn rejected(&self) -> u64 {
        self.claimed().saturating_sub(self.len() as u64)
    }

    /// Get an order by ID, if its slot has been written
    pub fn get(&self, order_id: OrderId) -> Option<&Order> {
        if order_id >= self.len() as u64 {
            return None;
        }
        self.slots[order_id as usize].get()
    }

    /// Written orders in slot order, paired with their slot index
    pub fn indexed_orders(&self) -> impl Iterator<Item = (usize, &Order)> + '_ {
        self.slots[..self.len()]
            .iter()
            .enumerate()
            .filter_map(|(slot, cell)| cell.get().map(|order| (slot, order)))
    }

    /// Written orders in slot order
    pub fn orders(&self) -> impl Iterator<Item = &Order> + '_ {
        self.indexed_orders().map(|(_, order)| order)
    }

    /// Consume the store and return its orders in slot order
    pub fn into_orders(self) -> Vec<Order> {
        let len = self.len();
        self.slots
            .into_vec()
            .into_iter()
            .take(len)
            .filter_map(OnceLock::into_inner)
            .collect()
    }
}

impl Default for OrderStore {
    fn default() -> Self {
        let config = StoreConfig::default();
        Self {
            id: Uuid::new_v4(),
            config,
            slots: (0..config.capacity).map(|_| OnceLock::new()).collect(),
            count: AtomicU64::new(0),
            report_lock: Mutex::new(()),
        }
    }
}

impl std::fmt::Debug for OrderStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderStore")
            .field("id", &self.id)
            .field("capacity", &self.config.capacity)
            .field("num_tickers", &self.config.num_tickers)
            .field("accepted", &self.len())
            .field("rejected", &self.rejected())
            .finish()
    }
}
