use crate::models::portfolio_snapshot::PortfolioSnapshot;
use actix::Message;

#[derive(Debug, Clone)]
pub struct SnapshotPayload;

impl Message for SnapshotPayload {
    type Result = PortfolioSnapshot;
}
