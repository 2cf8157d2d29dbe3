use crate::{
    errors::PortfolioError,
    models::trade::{MarketType, Trade, TradeSide, TradeStatus},
};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Row shape of the `trades` table. Enum columns are stored as text.
#[derive(Debug, Clone, FromRow)]
pub struct DBTrade {
    pub id: Uuid,
    pub user_id: Uuid,
    pub broker_id: Option<Uuid>,
    pub symbol: String,
    pub side: String,
    pub quantity: f64,
    pub entry_price: f64,
    pub exit_price: Option<f64>,
    pub profit_loss: f64,
    pub status: String,
    pub market_type: String,
    pub created_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
}

impl DBTrade {
    pub fn from_trade(trade: &Trade, user_id: Uuid) -> Result<Self, PortfolioError> {
        let broker_id = trade
            .broker_id
            .as_deref()
            .map(|id| parse_uuid("broker_id", id))
            .transpose()?;

        Ok(Self {
            id: parse_uuid("id", &trade.id)?,
            user_id,
            broker_id,
            symbol: trade.symbol.clone(),
            side: trade.side.to_string(),
            quantity: trade.quantity,
            entry_price: trade.entry_price,
            exit_price: trade.exit_price,
            profit_loss: trade.profit_loss,
            status: trade.status.to_string(),
            market_type: trade.market_type.to_string(),
            created_at: trade.created_at,
            closed_at: trade.closed_at,
        })
    }
}

impl TryFrom<DBTrade> for Trade {
    type Error = PortfolioError;

    fn try_from(row: DBTrade) -> Result<Self, Self::Error> {
        let malformed = |e: PortfolioError| PortfolioError::MalformedRow {
            table: "trades",
            reason: format!("{}: {}", row.id, e),
        };

        let side = row.side.parse::<TradeSide>().map_err(malformed)?;
        let status = row.status.parse::<TradeStatus>().map_err(malformed)?;
        let market_type = row.market_type.parse::<MarketType>().map_err(malformed)?;

        Ok(Trade {
            id: row.id.to_string(),
            broker_id: row.broker_id.map(|id| id.to_string()),
            symbol: row.symbol,
            side,
            quantity: row.quantity,
            entry_price: row.entry_price,
            exit_price: row.exit_price,
            profit_loss: row.profit_loss,
            status,
            market_type,
            created_at: row.created_at,
            closed_at: row.closed_at,
        })
    }
}

pub fn parse_uuid(field: &'static str, raw: &str) -> Result<Uuid, PortfolioError> {
    Uuid::parse_str(raw).map_err(|e| PortfolioError::InvalidField {
        field,
        reason: format!("{:?} is not a uuid ({})", raw, e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::trade_builder::TradeBuilder;
    use pretty_assertions::assert_eq;

    #[test]
    fn converts_to_row_and_back() {
        let id = Uuid::new_v4();
        let trade = TradeBuilder::new()
            .symbol("btcusdt")
            .side(TradeSide::Buy)
            .quantity(0.1)
            .entry_price(45000.0)
            .market_type(MarketType::Crypto)
            .build(id.to_string(), Utc::now())
            .unwrap();

        let row = DBTrade::from_trade(&trade, Uuid::new_v4()).unwrap();
        assert_eq!(row.side, "buy");
        assert_eq!(row.status, "open");

        let back = Trade::try_from(row).unwrap();
        assert_eq!(back, trade);
    }

    #[test]
    fn guest_ids_cannot_be_written_to_postgres() {
        let trade = TradeBuilder::new()
            .symbol("eurusd")
            .side(TradeSide::Sell)
            .quantity(1.0)
            .entry_price(1.1)
            .market_type(MarketType::Forex)
            .build("sample-1".into(), Utc::now())
            .unwrap();

        assert!(matches!(
            DBTrade::from_trade(&trade, Uuid::new_v4()),
            Err(PortfolioError::InvalidField { field: "id", .. })
        ));
    }

    #[test]
    fn unknown_enum_text_is_a_malformed_row() {
        let row = DBTrade {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            broker_id: None,
            symbol: "EURUSD".into(),
            side: "short".into(),
            quantity: 1.0,
            entry_price: 1.0,
            exit_price: None,
            profit_loss: 0.0,
            status: "open".into(),
            market_type: "forex".into(),
            created_at: Utc::now(),
            closed_at: None,
        };

        assert!(matches!(
            Trade::try_from(row),
            Err(PortfolioError::MalformedRow { table: "trades", .. })
        ));
    }
}
