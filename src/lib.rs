pub mod analytics;
pub mod config;
pub mod data_sources;
pub mod errors;
pub mod models;
pub mod persistence;
pub mod run_configs;
pub mod utils;

pub use errors::{PortfolioError, PortfolioResult};
pub use models::portfolio_store::PortfolioStore;
