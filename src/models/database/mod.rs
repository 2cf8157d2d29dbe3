pub mod db;
pub mod db_broker;
pub mod db_trade;
pub mod demo_db;
