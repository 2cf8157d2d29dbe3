use crate::models::broker::Broker;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Columns selected from `brokers`; credentials are never read back.
#[derive(Debug, Clone, FromRow)]
pub struct DBBroker {
    pub id: Uuid,
    pub name: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<DBBroker> for Broker {
    fn from(row: DBBroker) -> Self {
        Broker {
            id: row.id.to_string(),
            name: row.name,
            is_active: row.is_active,
            created_at: row.created_at,
        }
    }
}
