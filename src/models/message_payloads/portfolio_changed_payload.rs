use crate::models::portfolio_snapshot::PortfolioSnapshot;
use actix::Message;

/// Sent to subscribers after every reload of the store.
#[derive(Debug, Clone)]
pub struct PortfolioChangedPayload {
    pub snapshot: PortfolioSnapshot,
}

impl Message for PortfolioChangedPayload {
    type Result = ();
}
