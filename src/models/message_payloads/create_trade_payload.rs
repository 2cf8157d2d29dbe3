use crate::{
    errors::PortfolioResult,
    models::{trade::Trade, trade_builder::TradeBuilder},
};
use actix::Message;

#[derive(Debug, Clone)]
pub struct CreateTradePayload {
    pub trade: TradeBuilder,
}

impl Message for CreateTradePayload {
    type Result = PortfolioResult<Trade>;
}
