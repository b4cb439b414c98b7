//! Records held by the order store and produced by the match pass

use pricelevel::Side;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an order. Always equal to the slot index it was written to.
pub type OrderId = u64;

/// An order written into the store. Immutable once its slot has been filled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Slot index assigned by the store
    pub order_id: OrderId,

    /// Buy or sell
    pub side: Side,

    /// Instrument, in `[0, num_tickers)`
    pub ticker: u32,

    /// Carried through matching, never decremented
    pub quantity: u64,

    /// Limit price
    pub price: f64,
}

impl Order {
    /// Build an order record
    pub fn new(order_id: OrderId, side: Side, ticker: u32, quantity: u64, price: f64) -> Self {
        Self {
            order_id,
            side,
            ticker,
            quantity,
            price,
        }
    }

    /// True for buy orders
    pub fn is_buy(&self) -> bool {
        self.side == Side::Buy
    }

    /// True for sell orders
    pub fn is_sell(&self) -> bool {
        self.side == Side::Sell
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Order ID: {} | Side: {} | Ticker: {} | Quantity: {} | Price: {:.2}",
            self.order_id, self.side, self.ticker, self.quantity, self.price
        )
    }
}

/// A buy order paired with the cheapest sell of its ticker.
///
/// Both sides are copies; producing a match never touches the store.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Match {
    /// The buy order that crossed
    pub buy: Order,

    /// The lowest-priced sell for the same ticker
    pub sell: Order,
}

impl Match {
    /// Ticker shared by both legs
    pub fn ticker(&self) -> u32 {
        self.buy.ticker
    }

    /// Difference between what the buyer bid and what the seller asked
    pub fn price_improvement(&self) -> f64 {
        self.buy.price - self.sell.price
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Buy Order ID {}, ticker {}, price {:.2} matched with Sell Order ID {}, ticker {}, price {:.2}",
            self.buy.order_id,
            self.buy.ticker,
            self.buy.price,
            self.sell.order_id,
            self.sell.ticker,
            self.sell.price
        )
    }
}
