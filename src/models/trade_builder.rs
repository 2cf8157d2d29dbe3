use crate::{
    errors::{PortfolioError, PortfolioResult},
    models::trade::{realized_profit_loss, MarketType, Trade, TradeSide, TradeStatus},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Caller supplied fields for a new trade. The id and timestamps are filled
/// in by the store when the trade is built.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TradeBuilder {
    pub symbol: Option<String>,
    pub side: Option<TradeSide>,
    pub quantity: Option<f64>,
    pub entry_price: Option<f64>,
    pub exit_price: Option<f64>,
    pub status: Option<TradeStatus>,
    pub market_type: Option<MarketType>,
    pub broker_id: Option<String>,
}

impl TradeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn symbol(mut self, symbol: &str) -> Self {
        self.symbol = Some(symbol.to_string());
        self
    }

    pub fn side(mut self, side: TradeSide) -> Self {
        self.side = Some(side);
        self
    }

    pub fn quantity(mut self, quantity: f64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn entry_price(mut self, entry_price: f64) -> Self {
        self.entry_price = Some(entry_price);
        self
    }

    pub fn exit_price(mut self, exit_price: f64) -> Self {
        self.exit_price = Some(exit_price);
        self
    }

    pub fn status(mut self, status: TradeStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn market_type(mut self, market_type: MarketType) -> Self {
        self.market_type = Some(market_type);
        self
    }

    pub fn broker_id(mut self, broker_id: &str) -> Self {
        self.broker_id = Some(broker_id.to_string());
        self
    }

    /// Builds the trade as of `now`. A closed trade gets its P/L and
    /// `closed_at` here and nowhere else.
    pub fn build(&self, id: String, now: DateTime<Utc>) -> PortfolioResult<Trade> {
        let symbol = self
            .symbol
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(PortfolioError::MissingField("symbol"))?
            .to_uppercase();
        let side = self.side.ok_or(PortfolioError::MissingField("side"))?;
        let quantity = self.quantity.ok_or(PortfolioError::MissingField("quantity"))?;
        let entry_price = self
            .entry_price
            .ok_or(PortfolioError::MissingField("entry price"))?;
        let market_type = self
            .market_type
            .ok_or(PortfolioError::MissingField("market type"))?;
        let status = self.status.unwrap_or(TradeStatus::Open);

        ensure_positive("quantity", quantity)?;
        ensure_positive("entry_price", entry_price)?;
        if let Some(exit_price) = self.exit_price {
            if !exit_price.is_finite() {
                return Err(PortfolioError::InvalidField {
                    field: "exit_price",
                    reason: format!("{} is not a finite number", exit_price),
                });
            }
        }

        let (profit_loss, closed_at) = match status {
            TradeStatus::Closed => {
                let pl = self
                    .exit_price
                    .map(|exit| realized_profit_loss(side, entry_price, exit, quantity))
                    .unwrap_or(0.0);
                (pl, Some(now))
            }
            TradeStatus::Open => (0.0, None),
        };

        Ok(Trade {
            id,
            broker_id: self.broker_id.clone().filter(|b| !b.is_empty()),
            symbol,
            side,
            quantity,
            entry_price,
            exit_price: self.exit_price,
            profit_loss,
            status,
            market_type,
            created_at: now,
            closed_at,
        })
    }
}

fn ensure_positive(field: &'static str, value: f64) -> PortfolioResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PortfolioError::InvalidField {
            field,
            reason: format!("must be a positive number, got {}", value),
        })
    }
}
