use crate::models::trade::Trade;
use serde::{Deserialize, Serialize};

/// Headline numbers for the dashboard. Always recomputed from the current
/// trades, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioStats {
    pub total_trades: usize,
    pub open_trades: usize,
    pub closed_trades: usize,
    pub total_profit_loss: f64,
    pub win_rate: f64,
    pub total_invested: f64,
}

impl PortfolioStats {
    pub fn from_trades(trades: &[Trade]) -> Self {
        let open_trades = trades.iter().filter(|t| t.is_open()).count();
        let closed_trades = trades.iter().filter(|t| t.is_closed()).count();
        let total_profit_loss = trades.iter().map(|t| t.profit_loss).sum();
        // Winners are counted over every trade, the denominator is closed
        // trades only.
        let winning = trades.iter().filter(|t| t.profit_loss > 0.0).count();
        let total_invested = trades.iter().map(Trade::invested).sum();

        let win_rate = if closed_trades > 0 {
            winning as f64 / closed_trades as f64 * 100.0
        } else {
            0.0
        };

        Self {
            total_trades: trades.len(),
            open_trades,
            closed_trades,
            total_profit_loss,
            win_rate,
            total_invested,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::test_support::{closed, open};
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_input_is_all_zero() {
        assert_eq!(PortfolioStats::from_trades(&[]), PortfolioStats::default());
    }

    #[test]
    fn open_trades_contribute_zero_pl_but_count_as_invested() {
        let trades = vec![closed(10.0, 1), open(2.0, 50.0, 2), closed(-4.0, 3)];

        let stats = PortfolioStats::from_trades(&trades);

        assert_eq!(stats.total_trades, 3);
        assert_eq!(stats.open_trades, 1);
        assert_eq!(stats.closed_trades, 2);
        assert_eq!(stats.total_profit_loss, 6.0);
        assert_eq!(stats.win_rate, 50.0);
        // closed helpers use entry 100 x qty 1
        assert_eq!(stats.total_invested, 300.0);
    }

    #[test]
    fn win_rate_is_zero_without_closed_trades() {
        let stats = PortfolioStats::from_trades(&[open(1.0, 10.0, 1)]);
        assert_eq!(stats.win_rate, 0.0);
    }
}
