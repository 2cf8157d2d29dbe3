pub mod connect_broker_payload;
pub mod create_broker_payload;
pub mod create_trade_payload;
pub mod import_trades_payload;
pub mod portfolio_changed_payload;
pub mod refresh_payload;
pub mod snapshot_payload;
pub mod subscribe_payload;
pub mod update_trade_payload;
