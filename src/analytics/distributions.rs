use crate::models::trade::{MarketType, Trade};
use chrono::Datelike;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinLossCounts {
    pub winning: usize,
    pub losing: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketTypeCounts {
    pub forex: usize,
    pub crypto: usize,
}

/// Calendar month bucket, labelled like "Jan 2024".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn label(&self) -> String {
        const MONTHS: [&str; 12] = [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ];
        let name = MONTHS
            .get(self.month.saturating_sub(1) as usize)
            .copied()
            .unwrap_or("???");
        format!("{} {}", name, self.year)
    }
}

pub fn win_loss_counts(trades: &[Trade]) -> WinLossCounts {
    trades
        .iter()
        .filter(|t| t.is_closed())
        .fold(WinLossCounts::default(), |mut acc, t| {
            if t.profit_loss > 0.0 {
                acc.winning += 1;
            } else if t.profit_loss < 0.0 {
                acc.losing += 1;
            }
            acc
        })
}

pub fn market_type_counts(trades: &[Trade]) -> MarketTypeCounts {
    trades
        .iter()
        .fold(MarketTypeCounts::default(), |mut acc, t| {
            match t.market_type {
                MarketType::Forex => acc.forex += 1,
                MarketType::Crypto => acc.crypto += 1,
            }
            acc
        })
}

/// Closed-trade P/L summed per creation month (UTC). Months appear in the
/// order they are first met in `trades`, not sorted.
pub fn monthly_profit_loss(trades: &[Trade]) -> IndexMap<MonthKey, f64> {
    trades
        .iter()
        .filter(|t| t.is_closed())
        .fold(IndexMap::new(), |mut acc, t| {
            let key = MonthKey {
                year: t.created_at.year(),
                month: t.created_at.month(),
            };
            *acc.entry(key).or_insert(0.0) += t.profit_loss;
            acc
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::test_support::{closed, closed_on, open};
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_inputs() {
        assert_eq!(win_loss_counts(&[]), WinLossCounts::default());
        assert_eq!(market_type_counts(&[]), MarketTypeCounts::default());
        assert!(monthly_profit_loss(&[]).is_empty());
    }

    #[test]
    fn win_loss_ignores_open_trades() {
        let mut still_open = open(1.0, 10.0, 1);
        still_open.profit_loss = 99.0;
        let trades = vec![closed(5.0, 2), closed(-1.0, 3), closed(0.0, 4), still_open];

        assert_eq!(win_loss_counts(&trades), WinLossCounts { winning: 1, losing: 1 });
    }

    #[test]
    fn market_types_count_every_trade() {
        let mut btc = open(0.1, 45000.0, 1);
        btc.market_type = MarketType::Crypto;
        let trades = vec![closed(1.0, 1), btc];

        assert_eq!(
            market_type_counts(&trades),
            MarketTypeCounts { forex: 1, crypto: 1 }
        );
    }

    #[test]
    fn months_keep_first_encountered_order() {
        let trades = vec![
            closed_on(2024, 3, 10.0),
            closed_on(2023, 12, 5.0),
            closed_on(2024, 3, -4.0),
            closed_on(2024, 1, 2.0),
        ];

        let monthly = monthly_profit_loss(&trades);
        let labels: Vec<String> = monthly.keys().map(MonthKey::label).collect();
        let values: Vec<f64> = monthly.values().copied().collect();

        assert_eq!(labels, vec!["Mar 2024", "Dec 2023", "Jan 2024"]);
        assert_eq!(values, vec![6.0, 5.0, 2.0]);
    }

    #[test]
    fn monthly_skips_open_trades() {
        let trades = vec![open(1.0, 1.0, 1), closed(3.0, 2)];
        let monthly = monthly_profit_loss(&trades);

        assert_eq!(monthly.len(), 1);
        assert_eq!(monthly[&MonthKey { year: 2024, month: 1 }], 3.0);
    }
}
