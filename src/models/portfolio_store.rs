use crate::{
    analytics::portfolio_stats::PortfolioStats,
    data_sources::csv_trades::parse_trades,
    errors::{PortfolioError, PortfolioResult},
    models::{
        broker::Broker,
        message_payloads::{
            connect_broker_payload::ConnectBrokerPayload,
            create_broker_payload::CreateBrokerPayload,
            create_trade_payload::CreateTradePayload,
            import_trades_payload::ImportTradesPayload,
            portfolio_changed_payload::PortfolioChangedPayload, refresh_payload::RefreshPayload,
            snapshot_payload::SnapshotPayload, subscribe_payload::SubscribePayload,
            update_trade_payload::UpdateTradePayload,
        },
        portfolio_snapshot::PortfolioSnapshot,
        trade::Trade,
        traits::persistence_provider::PersistenceProvider,
    },
};
use actix::{
    fut::ActorFutureExt, Actor, AtomicResponse, Context, Handler, Recipient, WrapFuture,
};
use chrono::Utc;
use futures_util::join;
use std::{sync::Arc, time::Duration};
use tracing::{error, info, warn};

/// Result of re-reading both collections after a change.
struct Reload {
    trades: PortfolioResult<Vec<Trade>>,
    brokers: PortfolioResult<Vec<Broker>>,
}

async fn reload(provider: Arc<dyn PersistenceProvider>) -> Reload {
    let (trades, brokers) = join!(provider.fetch_trades(), provider.fetch_brokers());
    Reload { trades, brokers }
}

/// Owns the session's trades and brokers and keeps the derived statistics
/// in step with them.
///
/// Every mutation goes write, invalidate, reload: the provider is written,
/// then both collections are fetched again and the stats recomputed.
/// Mutations are handled as `AtomicResponse`s, so a second request waits
/// until the first one has finished.
pub struct PortfolioStore {
    provider: Arc<dyn PersistenceProvider>,
    trades: Vec<Trade>,
    brokers: Vec<Broker>,
    stats: PortfolioStats,
    loading: bool,
    broker_validation_delay: Duration,
    subscribers: Vec<Recipient<PortfolioChangedPayload>>,
}

impl PortfolioStore {
    pub fn new(provider: Arc<dyn PersistenceProvider>, broker_validation_delay: Duration) -> Self {
        Self {
            provider,
            trades: Vec::new(),
            brokers: Vec::new(),
            stats: PortfolioStats::default(),
            loading: false,
            broker_validation_delay,
            subscribers: Vec::new(),
        }
    }

    pub fn snapshot(&self) -> PortfolioSnapshot {
        PortfolioSnapshot {
            trades: self.trades.clone(),
            brokers: self.brokers.clone(),
            stats: self.stats,
            loading: self.loading,
        }
    }

    /// Read failures are logged and leave the previous collection in place.
    fn apply_reload(&mut self, reload: Reload) {
        match reload.trades {
            Ok(trades) => {
                self.trades = trades;
                self.stats = PortfolioStats::from_trades(&self.trades);
            }
            Err(e) => error!("Error fetching trades from {}: {}", self.provider.name(), e),
        }

        match reload.brokers {
            Ok(brokers) => self.brokers = brokers,
            Err(e) => error!("Error fetching brokers from {}: {}", self.provider.name(), e),
        }

        self.loading = false;
        self.notify();
    }

    fn notify(&mut self) {
        let snapshot = self.snapshot();
        self.subscribers.retain(|s| s.connected());

        for subscriber in &self.subscribers {
            subscriber.do_send(PortfolioChangedPayload {
                snapshot: snapshot.clone(),
            });
        }
    }

    fn default_broker_id(&self) -> Option<String> {
        self.brokers.first().map(|b| b.id.clone())
    }
}

impl Actor for PortfolioStore {
    type Context = Context<Self>;

    fn started(&mut self, _ctx: &mut Self::Context) {
        info!("Portfolio store started with {} persistence", self.provider.name());
    }
}

impl Handler<RefreshPayload> for PortfolioStore {
    type Result = AtomicResponse<Self, ()>;

    fn handle(&mut self, _msg: RefreshPayload, _ctx: &mut Self::Context) -> Self::Result {
        self.loading = true;
        let provider = self.provider.clone();

        AtomicResponse::new(Box::pin(
            reload(provider)
                .into_actor(self)
                .map(|reloaded, act, _ctx| act.apply_reload(reloaded)),
        ))
    }
}

impl Handler<SnapshotPayload> for PortfolioStore {
    type Result = actix::MessageResult<SnapshotPayload>;

    fn handle(&mut self, _msg: SnapshotPayload, _ctx: &mut Self::Context) -> Self::Result {
        actix::MessageResult(self.snapshot())
    }
}

impl Handler<SubscribePayload> for PortfolioStore {
    type Result = ();

    fn handle(&mut self, msg: SubscribePayload, _ctx: &mut Self::Context) -> Self::Result {
        self.subscribers.push(msg.recipient);
    }
}

impl Handler<CreateTradePayload> for PortfolioStore {
    type Result = AtomicResponse<Self, PortfolioResult<Trade>>;

    fn handle(&mut self, msg: CreateTradePayload, _ctx: &mut Self::Context) -> Self::Result {
        let provider = self.provider.clone();
        let mut builder = msg.trade;
        if builder.broker_id.is_none() {
            builder.broker_id = self.default_broker_id();
        }

        let fut = async move {
            let trade = builder.build(provider.next_trade_id(), Utc::now())?;
            provider.insert_trade(&trade).await?;
            info!("Trade {} {} {} added", trade.id, trade.side, trade.symbol);

            Ok::<_, PortfolioError>((trade, reload(provider).await))
        };

        AtomicResponse::new(Box::pin(fut.into_actor(self).map(
            |res, act, _ctx| -> PortfolioResult<Trade> {
                let (trade, reloaded) = res.map_err(|e| {
                    error!("Error adding trade: {}", e);
                    e
                })?;
                act.apply_reload(reloaded);
                Ok(trade)
            },
        )))
    }
}

impl Handler<UpdateTradePayload> for PortfolioStore {
    type Result = AtomicResponse<Self, PortfolioResult<()>>;

    fn handle(&mut self, msg: UpdateTradePayload, _ctx: &mut Self::Context) -> Self::Result {
        let provider = self.provider.clone();
        let update = msg.update.normalized();

        let fut = async move {
            provider.update_trade(&msg.id, &update).await?;
            info!("Trade {} updated", msg.id);

            Ok::<_, PortfolioError>(reload(provider).await)
        };

        AtomicResponse::new(Box::pin(fut.into_actor(self).map(
            |res, act, _ctx| -> PortfolioResult<()> {
                let reloaded = res.map_err(|e| {
                    error!("Error updating trade: {}", e);
                    e
                })?;
                act.apply_reload(reloaded);
                Ok(())
            },
        )))
    }
}

impl Handler<CreateBrokerPayload> for PortfolioStore {
    type Result = AtomicResponse<Self, PortfolioResult<Broker>>;

    fn handle(&mut self, msg: CreateBrokerPayload, _ctx: &mut Self::Context) -> Self::Result {
        let provider = self.provider.clone();

        let fut = async move {
            let (broker, credentials) = msg.broker.into_broker(provider.next_broker_id(), Utc::now());
            provider.insert_broker(&broker, &credentials).await?;
            info!("Broker {} ({}) added", broker.name, broker.id);

            Ok::<_, PortfolioError>((broker, reload(provider).await))
        };

        AtomicResponse::new(Box::pin(fut.into_actor(self).map(
            |res, act, _ctx| -> PortfolioResult<Broker> {
                let (broker, reloaded) = res.map_err(|e| {
                    error!("Error adding broker: {}", e);
                    e
                })?;
                act.apply_reload(reloaded);
                Ok(broker)
            },
        )))
    }
}

impl Handler<ConnectBrokerPayload> for PortfolioStore {
    type Result = AtomicResponse<Self, PortfolioResult<Broker>>;

    fn handle(&mut self, msg: ConnectBrokerPayload, _ctx: &mut Self::Context) -> Self::Result {
        let provider = self.provider.clone();
        let delay = self.broker_validation_delay;

        let fut = async move {
            // Stand-in for a round trip to the broker.
            tokio::time::sleep(delay).await;
            msg.kind.validate(&msg.credentials)?;

            let new_broker = msg.kind.new_broker(&msg.credentials)?;
            let (broker, credentials) = new_broker.into_broker(provider.next_broker_id(), Utc::now());
            provider.insert_broker(&broker, &credentials).await?;
            info!("Connected {} broker {}", broker.name, broker.id);

            Ok::<_, PortfolioError>((broker, reload(provider).await))
        };

        AtomicResponse::new(Box::pin(fut.into_actor(self).map(
            |res, act, _ctx| -> PortfolioResult<Broker> {
                let (broker, reloaded) = res.map_err(|e| {
                    if e.is_validation() {
                        warn!("Broker connection rejected: {}", e);
                    } else {
                        error!("Error connecting broker: {}", e);
                    }
                    e
                })?;
                act.apply_reload(reloaded);
                Ok(broker)
            },
        )))
    }
}

impl Handler<ImportTradesPayload> for PortfolioStore {
    type Result = AtomicResponse<Self, PortfolioResult<usize>>;

    fn handle(&mut self, msg: ImportTradesPayload, _ctx: &mut Self::Context) -> Self::Result {
        let provider = self.provider.clone();
        let default_broker = self.default_broker_id();

        let fut = async move {
            let trades = parse_trades(&msg.csv)?
                .into_iter()
                .enumerate()
                .map(|(i, mut builder)| {
                    if builder.broker_id.is_none() {
                        builder.broker_id = default_broker.clone();
                    }
                    builder
                        .build(provider.next_trade_id(), Utc::now())
                        .map_err(|e| PortfolioError::Validation(format!("line {}: {}", i + 2, e)))
                })
                .collect::<PortfolioResult<Vec<Trade>>>()?;

            let mut imported = 0;
            for trade in &trades {
                if let Err(e) = provider.insert_trade(trade).await {
                    error!("Import stopped after {} trades: {}", imported, e);
                    return Ok((Err(e), reload(provider).await));
                }
                imported += 1;
            }

            info!("Imported {} trades", imported);
            Ok::<_, PortfolioError>((Ok(imported), reload(provider).await))
        };

        AtomicResponse::new(Box::pin(fut.into_actor(self).map(
            |res, act, _ctx| -> PortfolioResult<usize> {
                let (outcome, reloaded) = res.map_err(|e| {
                    warn!("Trade import rejected: {}", e);
                    e
                })?;
                // Rows written before a failure are real, so show them.
                act.apply_reload(reloaded);
                outcome
            },
        )))
    }
}
