use crate::{
    config::AppConfig,
    errors::{PortfolioError, PortfolioResult},
    models::{
        broker::{Broker, BrokerCredentials},
        database::{
            db_broker::DBBroker,
            db_trade::{parse_uuid, DBTrade},
        },
        trade::Trade,
        trade_update::TradeUpdate,
        traits::persistence_provider::PersistenceProvider,
    },
};
use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, query, query_as, Pool, Postgres, QueryBuilder};
use tracing::{debug, info};
use uuid::Uuid;

/// Postgres backed persistence for an authenticated user. Every statement
/// is scoped to `user_id`.
pub struct DB {
    pool: Pool<Postgres>,
    user_id: Uuid,
}

impl DB {
    pub async fn new(config: &AppConfig, user_id: Uuid) -> PortfolioResult<Self> {
        let db_url = config
            .database_url
            .as_deref()
            .ok_or(PortfolioError::NotConfigured("DATABASE_URL"))?;

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(db_url)
            .await?;

        if config.run_migrations {
            sqlx::migrate!("./migrations").run(&pool).await?;
            info!("Database migrations applied");
        }

        Ok(Self::with_pool(pool, user_id))
    }

    pub fn with_pool(pool: Pool<Postgres>, user_id: Uuid) -> Self {
        Self { pool, user_id }
    }
}

#[async_trait]
impl PersistenceProvider for DB {
    fn name(&self) -> &'static str {
        "postgres"
    }

    fn next_trade_id(&self) -> String {
        Uuid::new_v4().to_string()
    }

    fn next_broker_id(&self) -> String {
        Uuid::new_v4().to_string()
    }

    async fn fetch_trades(&self) -> PortfolioResult<Vec<Trade>> {
        let q = r#"
            select
                id, user_id, broker_id, symbol, side, quantity, entry_price,
                exit_price, profit_loss, status, market_type, created_at, closed_at
            from trades
            where user_id = $1
            order by created_at desc
            "#;

        let rows = query_as::<_, DBTrade>(q)
            .bind(self.user_id)
            .fetch_all(&self.pool)
            .await?;

        debug!("Fetched {} trades for {}", rows.len(), self.user_id);

        rows.into_iter().map(Trade::try_from).collect()
    }

    async fn fetch_brokers(&self) -> PortfolioResult<Vec<Broker>> {
        let q = r#"
            select id, name, is_active, created_at
            from brokers
            where user_id = $1
            "#;

        let rows = query_as::<_, DBBroker>(q)
            .bind(self.user_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Broker::from).collect())
    }

    async fn insert_trade(&self, trade: &Trade) -> PortfolioResult<()> {
        let db_trade = DBTrade::from_trade(trade, self.user_id)?;

        let q = r#"
            insert into trades (
                id, user_id, broker_id, symbol, side, quantity, entry_price,
                exit_price, profit_loss, status, market_type, created_at, closed_at
            ) values (
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13
            )
            "#;

        query(q)
            .bind(db_trade.id)
            .bind(db_trade.user_id)
            .bind(db_trade.broker_id)
            .bind(&db_trade.symbol)
            .bind(&db_trade.side)
            .bind(db_trade.quantity)
            .bind(db_trade.entry_price)
            .bind(db_trade.exit_price)
            .bind(db_trade.profit_loss)
            .bind(&db_trade.status)
            .bind(&db_trade.market_type)
            .bind(db_trade.created_at)
            .bind(db_trade.closed_at)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn update_trade(&self, id: &str, update: &TradeUpdate) -> PortfolioResult<()> {
        // An id that is not even a uuid cannot exist in this table.
        let trade_id =
            parse_uuid("id", id).map_err(|_| PortfolioError::TradeNotFound(id.to_string()))?;

        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("update trades set ");
        let mut set = qb.separated(", ");

        if update.is_empty() {
            set.push("id = id");
        }
        if let Some(symbol) = &update.symbol {
            set.push("symbol = ").push_bind_unseparated(symbol.clone());
        }
        if let Some(side) = update.side {
            set.push("side = ").push_bind_unseparated(side.to_string());
        }
        if let Some(quantity) = update.quantity {
            set.push("quantity = ").push_bind_unseparated(quantity);
        }
        if let Some(entry_price) = update.entry_price {
            set.push("entry_price = ").push_bind_unseparated(entry_price);
        }
        if let Some(exit_price) = update.exit_price {
            set.push("exit_price = ").push_bind_unseparated(exit_price);
        }
        if let Some(profit_loss) = update.profit_loss {
            set.push("profit_loss = ").push_bind_unseparated(profit_loss);
        }
        if let Some(status) = update.status {
            set.push("status = ").push_bind_unseparated(status.to_string());
        }
        if let Some(market_type) = update.market_type {
            set.push("market_type = ").push_bind_unseparated(market_type.to_string());
        }
        if let Some(closed_at) = update.closed_at {
            set.push("closed_at = ").push_bind_unseparated(closed_at);
        }

        qb.push(" where id = ")
            .push_bind(trade_id)
            .push(" and user_id = ")
            .push_bind(self.user_id);

        let res = qb.build().execute(&self.pool).await?;

        if res.rows_affected() == 0 {
            return Err(PortfolioError::TradeNotFound(id.to_string()));
        }

        Ok(())
    }

    async fn insert_broker(
        &self,
        broker: &Broker,
        credentials: &BrokerCredentials,
    ) -> PortfolioResult<()> {
        let q = r#"
            insert into brokers (
                id, user_id, name, api_key, api_secret, is_active, created_at
            ) values (
                $1, $2, $3, $4, $5, $6, $7
            )
            "#;

        query(q)
            .bind(parse_uuid("id", &broker.id)?)
            .bind(self.user_id)
            .bind(&broker.name)
            .bind(&credentials.api_key)
            .bind(&credentials.api_secret)
            .bind(broker.is_active)
            .bind(broker.created_at)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
