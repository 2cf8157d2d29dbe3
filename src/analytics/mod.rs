//! Pure reductions over a slice of trades. Nothing here fails: empty input
//! gives zeroed or empty results.

pub mod distributions;
pub mod performance_metrics;
pub mod portfolio_stats;
pub mod series;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::models::trade::{MarketType, Trade, TradeSide, TradeStatus};
    use chrono::{TimeZone, Utc};

    /// Closed forex trade created on 2024-01-`day`, entry 100 x 1.
    pub fn closed(profit_loss: f64, day: u32) -> Trade {
        let created_at = Utc.with_ymd_and_hms(2024, 1, day, 12, 0, 0).unwrap();
        Trade {
            id: format!("closed-{}-{}", day, profit_loss),
            broker_id: None,
            symbol: "EURUSD".to_string(),
            side: TradeSide::Buy,
            quantity: 1.0,
            entry_price: 100.0,
            exit_price: Some(100.0 + profit_loss),
            profit_loss,
            status: TradeStatus::Closed,
            market_type: MarketType::Forex,
            created_at,
            closed_at: Some(created_at),
        }
    }

    pub fn closed_on(year: i32, month: u32, profit_loss: f64) -> Trade {
        let mut trade = closed(profit_loss, 1);
        trade.created_at = Utc.with_ymd_and_hms(year, month, 15, 0, 0, 0).unwrap();
        trade
    }

    pub fn open(quantity: f64, entry_price: f64, day: u32) -> Trade {
        Trade {
            id: format!("open-{}", day),
            broker_id: None,
            symbol: "EURUSD".to_string(),
            side: TradeSide::Buy,
            quantity,
            entry_price,
            exit_price: None,
            profit_loss: 0.0,
            status: TradeStatus::Open,
            market_type: MarketType::Forex,
            created_at: Utc.with_ymd_and_hms(2024, 1, day, 12, 0, 0).unwrap(),
            closed_at: None,
        }
    }
}
