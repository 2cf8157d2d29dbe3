use crate::models::message_payloads::portfolio_changed_payload::PortfolioChangedPayload;
use actix::{Message, Recipient};

pub struct SubscribePayload {
    pub recipient: Recipient<PortfolioChangedPayload>,
}

impl Message for SubscribePayload {
    type Result = ();
}
