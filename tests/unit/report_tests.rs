//! Tests for the text rendered on the reporting channel

#[cfg(test)]
mod tests {
    use orderlog_rs::report;
    use orderlog_rs::{Match, Order, OrderStore, StoreConfig};
    use pricelevel::Side;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing::Level;

    // Shared buffer the fmt subscriber writes formatted events into
    #[derive(Clone, Default)]
    struct CapturedOutput(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedOutput {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    // Run `f` with an INFO-level subscriber installed on this thread and return its lines
    fn capture_info_lines<F: FnOnce()>(f: F) -> Vec<String> {
        let output = CapturedOutput::default();
        let writer = output.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(Level::INFO)
            .finish();
        tracing::subscriber::with_default(subscriber, f);

        let bytes = output.0.lock().unwrap().clone();
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_order_display_fields() {
        let order = Order::new(12, Side::Buy, 301, 250, 99.5);
        assert_eq!(
            order.to_string(),
            "Order ID: 12 | Side: BUY | Ticker: 301 | Quantity: 250 | Price: 99.50"
        );
    }

    #[test]
    fn test_match_display_fields() {
        let m = Match {
            buy: Order::new(3, Side::Buy, 5, 10, 25.0),
            sell: Order::new(1, Side::Sell, 5, 10, 20.0),
        };
        assert_eq!(
            m.to_string(),
            "Buy Order ID 3, ticker 5, price 25.00 matched with Sell Order ID 1, ticker 5, price 20.00"
        );
        assert_eq!(m.price_improvement(), 5.0);
    }

    #[test]
    fn test_submit_acknowledges_accepted_orders_only() {
        let store = OrderStore::new(StoreConfig::new(1, 8).unwrap()).unwrap();

        let lines = capture_info_lines(|| {
            store.submit(Side::Buy, 3, 10, 12.5).unwrap();
            // Full store
            assert!(store.submit(Side::Sell, 3, 10, 12.5).is_err());
            // Ticker outside the universe
            assert!(store.submit(Side::Sell, 8, 10, 12.5).is_err());
        });

        let acks: Vec<&String> = lines
            .iter()
            .filter(|line| line.contains("Add Order ID:"))
            .collect();
        assert_eq!(acks.len(), 1, "captured: {lines:?}");
        for field in [
            "order_id=0",
            "side=BUY",
            "ticker=3",
            "quantity=10",
            "price=12.5",
        ] {
            assert!(acks[0].contains(field), "missing {field} in {}", acks[0]);
        }
    }

    #[test]
    fn test_summary_and_match_lines_carry_fields() {
        let store = OrderStore::new(StoreConfig::new(8, 8).unwrap()).unwrap();
        store.submit(Side::Sell, 5, 10, 30.0).unwrap();
        store.submit(Side::Sell, 5, 10, 20.0).unwrap();
        store.submit(Side::Sell, 5, 10, 20.0).unwrap();
        store.submit(Side::Buy, 5, 10, 25.0).unwrap();
        let matches = store.run_match_pass();

        let lines = capture_info_lines(|| {
            report::total_orders(store.len());
            report::matches(&matches);
        });

        assert_eq!(lines.len(), 3, "captured: {lines:?}");
        assert!(lines[0].contains("Total orders: 4"));
        assert!(lines[0].contains("total_orders=4"));
        assert!(lines[1].contains("Matches: 1"));
        assert!(lines[1].contains("match_count=1"));
        for field in [
            "match_index=0",
            "buy_order_id=3",
            "buy_ticker=5",
            "buy_price=25.0",
            "sell_order_id=1",
            "sell_ticker=5",
            "sell_price=20.0",
        ] {
            assert!(lines[2].contains(field), "missing {field} in {}", lines[2]);
        }
    }

    #[test]
    fn test_empty_match_pass_reports_zero() {
        let lines = capture_info_lines(|| {
            report::total_orders(0);
            report::matches(&[]);
        });
        assert_eq!(lines.len(), 2, "captured: {lines:?}");
        assert!(lines[0].contains("total_orders=0"));
        assert!(lines[1].contains("match_count=0"));
    }
}
