//! Reporting channel: the human-readable lines emitted for submissions and match passes.
//!
//! Every line is a `tracing` event at `info` level carrying the fields as structured
//! values, with the formatted text as the message.

use crate::store::{Match, Order};
use tracing::info;

/// Acknowledge an accepted order. Callers hold the store's report lock.
pub fn order_accepted(order: &Order) {
    info!(
        order_id = order.order_id,
        side = %order.side,
        ticker = order.ticker,
        quantity = order.quantity,
        price = order.price,
        "Add {}",
        order
    );
}

/// Total number of orders accepted into the store
pub fn total_orders(total: usize) {
    info!(total_orders = total, "Total orders: {}", total);
}

/// Match count followed by one line per match
pub fn matches(matches: &[Match]) {
    info!(match_count = matches.len(), "Matches: {}", matches.len());
    for (match_index, m) in matches.iter().enumerate() {
        info!(
            match_index,
            buy_order_id = m.buy.order_id,
            buy_ticker = m.buy.ticker,
            buy_price = m.buy.price,
            sell_order_id = m.sell.order_id,
            sell_ticker = m.sell.ticker,
            sell_price = m.sell.price,
            "Match: {} {}",
            match_index,
            m
        );
    }
}
