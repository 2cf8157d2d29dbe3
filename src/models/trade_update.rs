use crate::models::trade::{MarketType, Trade, TradeSide, TradeStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Partial update for one trade. `None` leaves a field untouched; for the
/// nullable columns `Some(None)` clears the value.
///
/// Nothing here recomputes P/L. Changing prices on a closed trade keeps its
/// stored `profit_loss` unless `profit_loss` is set explicitly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TradeUpdate {
    pub symbol: Option<String>,
    pub side: Option<TradeSide>,
    pub quantity: Option<f64>,
    pub entry_price: Option<f64>,
    pub exit_price: Option<Option<f64>>,
    pub profit_loss: Option<f64>,
    pub status: Option<TradeStatus>,
    pub market_type: Option<MarketType>,
    pub closed_at: Option<Option<DateTime<Utc>>>,
}

impl TradeUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub fn symbol(mut self, symbol: &str) -> Self {
        self.symbol = Some(symbol.to_string());
        self
    }

    pub fn exit_price(mut self, exit_price: Option<f64>) -> Self {
        self.exit_price = Some(exit_price);
        self
    }

    pub fn entry_price(mut self, entry_price: f64) -> Self {
        self.entry_price = Some(entry_price);
        self
    }

    pub fn profit_loss(mut self, profit_loss: f64) -> Self {
        self.profit_loss = Some(profit_loss);
        self
    }

    pub fn status(mut self, status: TradeStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn closed_at(mut self, closed_at: Option<DateTime<Utc>>) -> Self {
        self.closed_at = Some(closed_at);
        self
    }

    /// Symbols are stored trimmed and uppercased, the same as a new trade.
    pub fn normalized(mut self) -> Self {
        self.symbol = self.symbol.map(|s| s.trim().to_uppercase());
        self
    }

    pub fn apply(&self, trade: &mut Trade) {
        if let Some(symbol) = &self.symbol {
            trade.symbol = symbol.clone();
        }
        if let Some(side) = self.side {
            trade.side = side;
        }
        if let Some(quantity) = self.quantity {
            trade.quantity = quantity;
        }
        if let Some(entry_price) = self.entry_price {
            trade.entry_price = entry_price;
        }
        if let Some(exit_price) = self.exit_price {
            trade.exit_price = exit_price;
        }
        if let Some(profit_loss) = self.profit_loss {
            trade.profit_loss = profit_loss;
        }
        if let Some(status) = self.status {
            trade.status = status;
        }
        if let Some(market_type) = self.market_type {
            trade.market_type = market_type;
        }
        if let Some(closed_at) = self.closed_at {
            trade.closed_at = closed_at;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{trade::TradeStatus, trade_builder::TradeBuilder};
    use chrono::TimeZone;

    fn closed_trade() -> Trade {
        TradeBuilder::new()
            .symbol("gbpusd")
            .side(TradeSide::Sell)
            .quantity(2.0)
            .entry_price(1.2567)
            .exit_price(1.2534)
            .status(TradeStatus::Closed)
            .market_type(MarketType::Forex)
            .build("t".into(), Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap())
            .unwrap()
    }

    #[test]
    fn editing_prices_keeps_frozen_pl() {
        let mut trade = closed_trade();
        let pl = trade.profit_loss;

        TradeUpdate::new()
            .entry_price(1.3000)
            .exit_price(Some(1.1000))
            .apply(&mut trade);

        assert_eq!(trade.entry_price, 1.3000);
        assert_eq!(trade.exit_price, Some(1.1000));
        assert_eq!(trade.profit_loss, pl);
    }

    #[test]
    fn nullable_fields_can_be_cleared() {
        let mut trade = closed_trade();

        TradeUpdate::new()
            .status(TradeStatus::Open)
            .exit_price(None)
            .closed_at(None)
            .apply(&mut trade);

        assert!(trade.is_open());
        assert_eq!(trade.exit_price, None);
        assert_eq!(trade.closed_at, None);
    }

    #[test]
    fn normalized_symbol_matches_builder_output() {
        let mut trade = closed_trade();

        TradeUpdate::new().symbol(" eurjpy ").normalized().apply(&mut trade);

        assert_eq!(trade.symbol, "EURJPY");
        assert_eq!(TradeUpdate::new().normalized(), TradeUpdate::new());
    }

    #[test]
    fn default_update_is_empty() {
        assert!(TradeUpdate::new().is_empty());
        assert!(!TradeUpdate::new().profit_loss(1.0).is_empty());
    }
}
