use crate::models::trade::Trade;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlPoint {
    pub trade_id: String,
    pub label: String,
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

/// Running P/L total, one point per trade, oldest first. Trades created at
/// the same instant keep their input order.
pub fn cumulative_profit_loss(trades: &[Trade]) -> Vec<PlPoint> {
    let mut sorted: Vec<&Trade> = trades.iter().collect();
    sorted.sort_by_key(|t| t.created_at);

    sorted
        .into_iter()
        .scan(0.0, |running, trade| {
            *running += trade.profit_loss;
            Some(PlPoint {
                trade_id: trade.id.clone(),
                label: trade.created_at.format("%Y-%m-%d").to_string(),
                timestamp: trade.created_at,
                value: *running,
            })
        })
        .collect()
}

/// The first `n` trades in store order.
pub fn recent_trades(trades: &[Trade], n: usize) -> &[Trade] {
    &trades[..trades.len().min(n)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::test_support::{closed, open};
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_input_gives_empty_series() {
        assert!(cumulative_profit_loss(&[]).is_empty());
    }

    #[test]
    fn sorts_by_creation_and_accumulates() {
        let trades = vec![closed(5.0, 3), closed(10.0, 1), open(1.0, 10.0, 2)];

        let series = cumulative_profit_loss(&trades);
        let values: Vec<f64> = series.iter().map(|p| p.value).collect();
        let labels: Vec<&str> = series.iter().map(|p| p.label.as_str()).collect();

        assert_eq!(series.len(), trades.len());
        assert_eq!(values, vec![10.0, 10.0, 15.0]);
        assert_eq!(labels, vec!["2024-01-01", "2024-01-02", "2024-01-03"]);
    }

    #[test]
    fn equal_timestamps_keep_input_order() {
        let mut a = closed(1.0, 5);
        a.id = "a".into();
        let mut b = closed(2.0, 5);
        b.id = "b".into();
        let mut c = closed(3.0, 5);
        c.id = "c".into();

        let series = cumulative_profit_loss(&[b, a, c]);
        let ids: Vec<&str> = series.iter().map(|p| p.trade_id.as_str()).collect();

        assert_eq!(ids, vec!["b", "a", "c"]);
        assert_eq!(series.last().unwrap().value, 6.0);
    }

    #[test]
    fn recent_trades_caps_at_length() {
        let trades = vec![closed(1.0, 1), closed(2.0, 2)];

        assert_eq!(recent_trades(&trades, 5).len(), 2);
        assert_eq!(recent_trades(&trades, 1)[0].profit_loss, 1.0);
    }
}
