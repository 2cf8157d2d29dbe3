use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A broker connection record. Credentials are write-only and never loaded
/// back into memory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Broker {
    pub id: String,
    pub name: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Opaque credential strings stored alongside a broker.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrokerCredentials {
    pub api_key: String,
    pub api_secret: String,
}

// Keep secrets out of logs.
impl std::fmt::Debug for BrokerCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrokerCredentials")
            .field("api_key", &"***")
            .field("api_secret", &"***")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBroker {
    pub name: String,
    pub credentials: BrokerCredentials,
}

impl NewBroker {
    pub fn new(name: &str, api_key: &str, api_secret: &str) -> Self {
        Self {
            name: name.to_string(),
            credentials: BrokerCredentials {
                api_key: api_key.to_string(),
                api_secret: api_secret.to_string(),
            },
        }
    }

    /// New brokers are always active.
    pub fn into_broker(self, id: String, now: DateTime<Utc>) -> (Broker, BrokerCredentials) {
        let broker = Broker {
            id,
            name: self.name,
            is_active: true,
            created_at: now,
        };

        (broker, self.credentials)
    }
}
