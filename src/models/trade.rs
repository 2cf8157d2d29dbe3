use crate::errors::PortfolioError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeSide {
    Buy,
    Sell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeStatus {
    Open,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketType {
    Forex,
    Crypto,
}

/// One journaled position.
///
/// `profit_loss` is written once, when the trade is created closed, and is
/// never derived from `entry_price`/`exit_price` again. Editing prices on a
/// closed trade therefore leaves the stored P/L untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub id: String,
    pub broker_id: Option<String>,
    pub symbol: String,
    pub side: TradeSide,
    pub quantity: f64,
    pub entry_price: f64,
    pub exit_price: Option<f64>,
    pub profit_loss: f64,
    pub status: TradeStatus,
    pub market_type: MarketType,
    pub created_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
}

impl Trade {
    pub fn is_open(&self) -> bool {
        self.status == TradeStatus::Open
    }

    pub fn is_closed(&self) -> bool {
        self.status == TradeStatus::Closed
    }

    /// Capital committed at entry.
    pub fn invested(&self) -> f64 {
        self.entry_price * self.quantity
    }
}

/// Realized P/L for a position closed at `exit_price`.
pub fn realized_profit_loss(side: TradeSide, entry_price: f64, exit_price: f64, quantity: f64) -> f64 {
    match side {
        TradeSide::Buy => (exit_price - entry_price) * quantity,
        TradeSide::Sell => (entry_price - exit_price) * quantity,
    }
}

impl Display for TradeSide {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "buy"),
            Self::Sell => write!(f, "sell"),
        }
    }
}

impl FromStr for TradeSide {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "buy" => Ok(Self::Buy),
            "sell" => Ok(Self::Sell),
            other => Err(PortfolioError::InvalidField {
                field: "side",
                reason: format!("expected buy or sell, got {:?}", other),
            }),
        }
    }
}

impl Display for TradeStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Closed => write!(f, "closed"),
        }
    }
}

impl FromStr for TradeStatus {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "closed" => Ok(Self::Closed),
            other => Err(PortfolioError::InvalidField {
                field: "status",
                reason: format!("expected open or closed, got {:?}", other),
            }),
        }
    }
}

impl Display for MarketType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Forex => write!(f, "forex"),
            Self::Crypto => write!(f, "crypto"),
        }
    }
}

impl FromStr for MarketType {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "forex" => Ok(Self::Forex),
            "crypto" => Ok(Self::Crypto),
            other => Err(PortfolioError::InvalidField {
                field: "market_type",
                reason: format!("expected forex or crypto, got {:?}", other),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(TradeSide::Buy, 0.01)]
    #[case(TradeSide::Sell, -0.01)]
    fn realized_pl_follows_side(#[case] side: TradeSide, #[case] expected: f64) {
        let pl = realized_profit_loss(side, 1.1000, 1.1050, 2.0);
        assert!((pl - expected).abs() < 1e-9, "got {}", pl);
    }

    #[test]
    fn enums_round_trip_through_text() {
        assert_eq!("SELL".parse::<TradeSide>().unwrap(), TradeSide::Sell);
        assert_eq!(" closed ".parse::<TradeStatus>().unwrap(), TradeStatus::Closed);
        assert_eq!("Crypto".parse::<MarketType>().unwrap(), MarketType::Crypto);
        assert_eq!(MarketType::Forex.to_string(), "forex");
    }

    #[test]
    fn unknown_side_is_rejected() {
        assert!("hold".parse::<TradeSide>().is_err());
    }
}
