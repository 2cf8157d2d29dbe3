use crate::{
    errors::PortfolioResult,
    models::{
        broker::{Broker, BrokerCredentials},
        trade::Trade,
        trade_update::TradeUpdate,
    },
};
use async_trait::async_trait;

/// Where trades and brokers live for the current session. Chosen once when
/// the session starts; the store never branches on guest mode itself.
#[async_trait]
pub trait PersistenceProvider: Send + Sync {
    /// Short name used in log lines.
    fn name(&self) -> &'static str;

    fn next_trade_id(&self) -> String;

    fn next_broker_id(&self) -> String;

    /// All trades of the session owner, in display order.
    async fn fetch_trades(&self) -> PortfolioResult<Vec<Trade>>;

    async fn fetch_brokers(&self) -> PortfolioResult<Vec<Broker>>;

    async fn insert_trade(&self, trade: &Trade) -> PortfolioResult<()>;

    /// Fails with `TradeNotFound` when no trade has this id.
    async fn update_trade(&self, id: &str, update: &TradeUpdate) -> PortfolioResult<()>;

    async fn insert_broker(
        &self,
        broker: &Broker,
        credentials: &BrokerCredentials,
    ) -> PortfolioResult<()>;
}
