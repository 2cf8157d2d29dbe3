use crate::{
    errors::PortfolioResult,
    models::{broker::Broker, broker_kind::BrokerKind},
};
use actix::Message;
use std::collections::BTreeMap;

/// Credential form submission for a known broker platform.
#[derive(Clone)]
pub struct ConnectBrokerPayload {
    pub kind: BrokerKind,
    pub credentials: BTreeMap<String, String>,
}

impl std::fmt::Debug for ConnectBrokerPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectBrokerPayload")
            .field("kind", &self.kind)
            .field("fields", &self.credentials.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Message for ConnectBrokerPayload {
    type Result = PortfolioResult<Broker>;
}
