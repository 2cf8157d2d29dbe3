pub mod broker;
pub mod broker_kind;
pub mod database;
pub mod message_payloads;
pub mod portfolio_snapshot;
pub mod portfolio_store;
pub mod session;
pub mod trade;
pub mod trade_builder;
pub mod trade_update;
pub mod traits;
