//! Contains the batch matching pass run over a completed order store.

use super::book::OrderStore;
use super::order::{Match, Order};
use tracing::trace;

/// Per-ticker result of cheapest-sell discovery.
///
/// Two parallel tables indexed by ticker: the lowest sell price seen so far
/// (`+inf` until a sell arrives) and the slot holding that sell.
#[derive(Debug, Clone)]
pub struct LowestSells {
    prices: Vec<f64>,
    sells: Vec<Option<(usize, Order)>>,
}

impl LowestSells {
    /// Empty table for a universe of `num_tickers`
    pub fn new(num_tickers: u32) -> Self {
        Self {
            prices: vec![f64::INFINITY; num_tickers as usize],
            sells: vec![None; num_tickers as usize],
        }
    }

    /// First pass: scan orders in slot order and keep the cheapest sell per ticker.
    pub fn discover<'a, I>(num_tickers: u32, orders: I) -> Self
    where
        I: IntoIterator<Item = (usize, &'a Order)>,
    {
        let mut lowest = Self::new(num_tickers);
        for (slot, order) in orders {
            lowest.observe(slot, order);
        }
        lowest
    }

    /// Record `order` if it is a sell strictly cheaper than the current lowest for its ticker.
    ///
    /// Equal prices do not replace, so the earliest slot wins a tie. Non-sell orders and
    /// tickers outside the table are ignored.
    pub fn observe(&mut self, slot: usize, order: &Order) {
        if !order.is_sell() {
            return;
        }
        let ticker = order.ticker as usize;
        let Some(lowest_price) = self.prices.get_mut(ticker) else {
            return;
        };
        if order.price < *lowest_price {
            *lowest_price = order.price;
            self.sells[ticker] = Some((slot, *order));
        }
    }

    /// Lowest sell price and its slot for a ticker, if any sell was seen
    pub fn lowest(&self, ticker: u32) -> Option<(f64, usize)> {
        let ticker = ticker as usize;
        self.sells
            .get(ticker)
            .copied()
            .flatten()
            .map(|(slot, _)| (self.prices[ticker], slot))
    }

    /// The recorded lowest sell order for a ticker
    pub fn sell_for(&self, ticker: u32) -> Option<&Order> {
        self.sells
            .get(ticker as usize)
            .and_then(|entry| entry.as_ref())
            .map(|(_, order)| order)
    }

    /// Number of tickers with at least one sell
    pub fn tickers_with_sells(&self) -> usize {
        self.sells.iter().filter(|entry| entry.is_some()).count()
    }

    /// Second pass: pair every buy at or above its ticker's lowest sell.
    ///
    /// One sell may be paired with any number of buys; nothing is consumed.
    /// Matches come out in the order the buys are visited.
    pub fn pair<'a, I>(&self, orders: I) -> Vec<Match>
    where
        I: IntoIterator<Item = (usize, &'a Order)>,
    {
        let mut matches = Vec::new();
        for (_, buy) in orders {
            if !buy.is_buy() {
                continue;
            }
            let Some(sell) = self.sell_for(buy.ticker) else {
                continue;
            };
            if buy.price >= self.prices[buy.ticker as usize] {
                matches.push(Match {
                    buy: *buy,
                    sell: *sell,
                });
            }
        }
        matches
    }
}

/// Run both passes over an already-frozen sequence of orders.
///
/// Slot indices are positions in `orders`.
pub fn match_orders(num_tickers: u32, orders: &[Order]) -> Vec<Match> {
    let lowest = LowestSells::discover(num_tickers, orders.iter().enumerate());
    lowest.pair(orders.iter().enumerate())
}

impl OrderStore {
    /// Cheapest-sell discovery over the written slots
    pub fn discover_lowest_sells(&self) -> LowestSells {
        LowestSells::discover(self.config.num_tickers, self.indexed_orders())
    }

    /// Pair every buy order with the lowest-priced sell of its ticker.
    ///
    /// Must run after all producers have finished. Matches are ordered by the buy's
    /// slot index. An empty store yields no matches.
    pub fn run_match_pass(&self) -> Vec<Match> {
        trace!(
            "Order store {}: match pass over {} orders",
            self.id,
            self.len()
        );
        let lowest = self.discover_lowest_sells();
        trace!(
            "Order store {}: {} tickers have a resting sell",
            self.id,
            lowest.tickers_with_sells()
        );
        let matches = lowest.pair(self.indexed_orders());
        trace!(
            "Order store {}: match pass produced {} matches",
            self.id,
            matches.len()
        );
        matches
    }
}
