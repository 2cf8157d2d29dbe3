use crate::models::trade::Trade;
use serde::{Deserialize, Serialize};

/// Closed-trade performance figures shown on the analytics page.
///
/// `profit_factor` is the ratio of the average win to the average loss,
/// not gross profit over gross loss. With unequal win and loss counts the
/// two differ.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    pub total_profit_loss: f64,
    pub winning_trades: usize,
    pub losing_trades: usize,
    pub win_rate: f64,
    pub average_win: f64,
    pub average_loss: f64,
    pub profit_factor: f64,
    pub largest_win: f64,
    pub largest_loss: f64,
    pub roi: f64,
}

impl PerformanceMetrics {
    pub fn from_trades(trades: &[Trade]) -> Self {
        let closed: Vec<&Trade> = trades.iter().filter(|t| t.is_closed()).collect();
        let wins: Vec<f64> = closed
            .iter()
            .map(|t| t.profit_loss)
            .filter(|pl| *pl > 0.0)
            .collect();
        let losses: Vec<f64> = closed
            .iter()
            .map(|t| t.profit_loss)
            .filter(|pl| *pl < 0.0)
            .collect();

        let total_profit_loss: f64 = closed.iter().map(|t| t.profit_loss).sum();
        // Capital is taken over every trade, open ones included.
        let total_invested: f64 = trades.iter().map(Trade::invested).sum();

        let win_rate = percentage(wins.len() as f64, closed.len() as f64);
        let average_win = mean(&wins);
        let average_loss = mean(&losses).abs();
        let profit_factor = if average_loss > 0.0 {
            average_win / average_loss
        } else {
            0.0
        };
        let largest_win = wins.iter().copied().reduce(f64::max).unwrap_or(0.0);
        let largest_loss = losses.iter().copied().reduce(f64::min).unwrap_or(0.0);
        let roi = percentage(total_profit_loss, total_invested);

        Self {
            total_profit_loss,
            winning_trades: wins.len(),
            losing_trades: losses.len(),
            win_rate,
            average_win,
            average_loss,
            profit_factor,
            largest_win,
            largest_loss,
            roi,
        }
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

fn percentage(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        part / whole * 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::test_support::{closed, open};
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_input_is_all_zero() {
        assert_eq!(PerformanceMetrics::from_trades(&[]), PerformanceMetrics::default());
    }

    #[test]
    fn profit_factor_is_ratio_of_averages() {
        let trades = vec![
            closed(10.0, 1),
            closed(20.0, 2),
            closed(30.0, 3),
            closed(-5.0, 4),
        ];

        let m = PerformanceMetrics::from_trades(&trades);

        assert_eq!(m.average_win, 20.0);
        assert_eq!(m.average_loss, 5.0);
        assert_eq!(m.profit_factor, 4.0);
        assert_eq!(m.win_rate, 75.0);
        assert_eq!(m.largest_win, 30.0);
        assert_eq!(m.largest_loss, -5.0);
    }

    #[test]
    fn profit_factor_is_zero_without_losses() {
        let m = PerformanceMetrics::from_trades(&[closed(12.0, 1)]);

        assert_eq!(m.profit_factor, 0.0);
        assert_eq!(m.average_loss, 0.0);
        assert_eq!(m.largest_loss, 0.0);
    }

    #[test]
    fn breakeven_trades_are_neither_wins_nor_losses() {
        let m = PerformanceMetrics::from_trades(&[closed(0.0, 1), closed(8.0, 2)]);

        assert_eq!(m.winning_trades, 1);
        assert_eq!(m.losing_trades, 0);
        assert_eq!(m.win_rate, 50.0);
    }

    #[test]
    fn roi_divides_closed_pl_by_all_invested_capital() {
        // 3 closed trades at 100 each + one open trade of 100.
        let trades = vec![
            closed(30.0, 1),
            closed(-10.0, 2),
            closed(20.0, 3),
            open(1.0, 100.0, 4),
        ];

        let m = PerformanceMetrics::from_trades(&trades);

        assert_eq!(m.total_profit_loss, 40.0);
        assert_eq!(m.roi, 10.0);
    }

    #[test]
    fn only_open_trades_gives_zero_win_rate() {
        let m = PerformanceMetrics::from_trades(&[open(1.0, 10.0, 1)]);
        assert_eq!(m.win_rate, 0.0);
        assert_eq!(m.roi, 0.0);
    }
}
