//! Order store operations: submitting orders into free slots

use super::book::OrderStore;
use super::error::OrderStoreError;
use super::order::{Order, OrderId};
use crate::report;
use pricelevel::Side;
use std::sync::PoisonError;
use std::sync::atomic::Ordering;
use tracing::{debug, trace};

impl OrderStore {
    /// Submit an order into the next free slot.
    ///
    /// Parameters are validated before a slot is claimed, so a malformed order never
    /// consumes capacity. The slot index is claimed with a relaxed `fetch_add`: every
    /// caller gets a distinct index, and only that caller writes the slot. When the
    /// claimed index falls beyond capacity the order is dropped and
    /// [`OrderStoreError::CapacityExceeded`] is returned; nothing is stored.
    ///
    /// On success the assigned order ID (equal to the slot index) is returned and an
    /// acknowledgment is reported.
    pub fn submit(
        &self,
        side: Side,
        ticker: u32,
        quantity: u64,
        price: f64,
    ) -> Result<OrderId, OrderStoreError> {
        self.validate_order(ticker, quantity, price)?;

        let index = self.count.fetch_add(1, Ordering::Relaxed);
        if index >= self.config.capacity as u64 {
            debug!(
                "Order store {}: dropping {} order for ticker {}, slot {} beyond capacity {}",
                self.id, side, ticker, index, self.config.capacity
            );
            return Err(OrderStoreError::CapacityExceeded {
                capacity: self.config.capacity,
                index,
            });
        }

        let order = Order::new(index, side, ticker, quantity, price);
        // The counter never hands out the same index twice
        let written = self.slots[index as usize].set(order).is_ok();
        debug_assert!(written, "slot {} written twice", index);
        trace!("Order store {}: wrote slot {}", self.id, index);

        {
            let _guard = self
                .report_lock
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            report::order_accepted(&order);
        }

        Ok(index)
    }

    /// Submit a buy order
    pub fn submit_buy(
        &self,
        ticker: u32,
        quantity: u64,
        price: f64,
    ) -> Result<OrderId, OrderStoreError> {
        self.submit(Side::Buy, ticker, quantity, price)
    }

    /// Submit a sell order
    pub fn submit_sell(
        &self,
        ticker: u32,
        quantity: u64,
        price: f64,
    ) -> Result<OrderId, OrderStoreError> {
        self.submit(Side::Sell, ticker, quantity, price)
    }

    /// Check the caller contract: ticker in range, positive quantity, finite positive price
    pub fn validate_order(
        &self,
        ticker: u32,
        quantity: u64,
        price: f64,
    ) -> Result<(), OrderStoreError> {
        if ticker >= self.config.num_tickers {
            return Err(OrderStoreError::InvalidTicker {
                ticker,
                num_tickers: self.config.num_tickers,
            });
        }
        if quantity == 0 {
            return Err(OrderStoreError::InvalidQuantity { quantity });
        }
        if !price.is_finite() || price <= 0.0 {
            return Err(OrderStoreError::InvalidPrice { price });
        }
        Ok(())
    }
}
