use crate::{
    errors::{PortfolioError, PortfolioResult},
    models::{
        broker::{Broker, BrokerCredentials},
        trade::{MarketType, Trade, TradeSide, TradeStatus},
        trade_update::TradeUpdate,
        traits::persistence_provider::PersistenceProvider,
    },
    utils::constants::GUEST_ID_PREFIX,
};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

/// In-memory persistence for guest sessions. Seeded with sample data and
/// dropped with the session.
pub struct DemoDB {
    trades: RwLock<Vec<Trade>>,
    brokers: RwLock<Vec<Broker>>,
}

impl DemoDB {
    pub fn new(trades: Vec<Trade>, brokers: Vec<Broker>) -> Self {
        Self {
            trades: RwLock::new(trades),
            brokers: RwLock::new(brokers),
        }
    }

    /// Three sample trades and two sample brokers, timestamped relative to
    /// `now`.
    pub fn with_fixtures(now: DateTime<Utc>) -> Self {
        Self::new(sample_trades(now), sample_brokers(now))
    }
}

#[async_trait]
impl PersistenceProvider for DemoDB {
    fn name(&self) -> &'static str {
        "demo"
    }

    fn next_trade_id(&self) -> String {
        format!("{}{}", GUEST_ID_PREFIX, Uuid::new_v4().simple())
    }

    fn next_broker_id(&self) -> String {
        format!("{}broker-{}", GUEST_ID_PREFIX, Uuid::new_v4().simple())
    }

    async fn fetch_trades(&self) -> PortfolioResult<Vec<Trade>> {
        Ok(self.trades.read().await.clone())
    }

    async fn fetch_brokers(&self) -> PortfolioResult<Vec<Broker>> {
        Ok(self.brokers.read().await.clone())
    }

    async fn insert_trade(&self, trade: &Trade) -> PortfolioResult<()> {
        // Newest first, like the remote ordering.
        self.trades.write().await.insert(0, trade.clone());
        debug!("Demo trade {} added", trade.id);
        Ok(())
    }

    async fn update_trade(&self, id: &str, update: &TradeUpdate) -> PortfolioResult<()> {
        let mut trades = self.trades.write().await;
        let trade = trades
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| PortfolioError::TradeNotFound(id.to_string()))?;

        update.apply(trade);
        Ok(())
    }

    async fn insert_broker(
        &self,
        broker: &Broker,
        _credentials: &BrokerCredentials,
    ) -> PortfolioResult<()> {
        self.brokers.write().await.insert(0, broker.clone());
        Ok(())
    }
}

pub fn sample_trades(now: DateTime<Utc>) -> Vec<Trade> {
    vec![
        Trade {
            id: "sample-1".to_string(),
            broker_id: None,
            symbol: "EURUSD".to_string(),
            side: TradeSide::Buy,
            quantity: 1.5,
            entry_price: 1.1234,
            exit_price: Some(1.1289),
            profit_loss: 82.5,
            status: TradeStatus::Closed,
            market_type: MarketType::Forex,
            created_at: now - Duration::days(1),
            closed_at: Some(now - Duration::hours(12)),
        },
        Trade {
            id: "sample-2".to_string(),
            broker_id: None,
            symbol: "BTCUSDT".to_string(),
            side: TradeSide::Buy,
            quantity: 0.1,
            entry_price: 45000.0,
            exit_price: None,
            profit_loss: 0.0,
            status: TradeStatus::Open,
            market_type: MarketType::Crypto,
            created_at: now - Duration::hours(1),
            closed_at: None,
        },
        Trade {
            id: "sample-3".to_string(),
            broker_id: None,
            symbol: "GBPUSD".to_string(),
            side: TradeSide::Sell,
            quantity: 2.0,
            entry_price: 1.2567,
            exit_price: Some(1.2534),
            profit_loss: 66.0,
            status: TradeStatus::Closed,
            market_type: MarketType::Forex,
            created_at: now - Duration::days(2),
            closed_at: Some(now - Duration::days(1)),
        },
    ]
}

pub fn sample_brokers(now: DateTime<Utc>) -> Vec<Broker> {
    vec![
        Broker {
            id: "sample-broker-1".to_string(),
            name: "MetaTrader 5".to_string(),
            is_active: true,
            created_at: now - Duration::days(7),
        },
        Broker {
            id: "sample-broker-2".to_string(),
            name: "Zerodha Kite".to_string(),
            is_active: true,
            created_at: now - Duration::days(14),
        },
    ]
}
