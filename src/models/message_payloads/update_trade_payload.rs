use crate::{errors::PortfolioResult, models::trade_update::TradeUpdate};
use actix::Message;

#[derive(Debug, Clone)]
pub struct UpdateTradePayload {
    pub id: String,
    pub update: TradeUpdate,
}

impl Message for UpdateTradePayload {
    type Result = PortfolioResult<()>;
}
