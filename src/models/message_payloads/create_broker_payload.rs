use crate::{
    errors::PortfolioResult,
    models::broker::{Broker, NewBroker},
};
use actix::Message;

#[derive(Debug, Clone)]
pub struct CreateBrokerPayload {
    pub broker: NewBroker,
}

impl Message for CreateBrokerPayload {
    type Result = PortfolioResult<Broker>;
}
