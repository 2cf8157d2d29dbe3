use anyhow::{anyhow, Result};
use std::{env, path::PathBuf};
use tracing::error;
use trade_journal::{config::AppConfig, models::session::Session, run_configs};
use tracing_subscriber::EnvFilter;

#[actix::main]
async fn main() -> Result<()> {
    // RUST_LOG may come from .env.
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Invalid configuration: {}", e);
        e
    })?;

    let args: Vec<String> = env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        None | Some("dashboard") => run_configs::dashboard::run(&config, config.session()).await,
        Some("guest") => run_configs::dashboard::run(&config, Session::guest()).await,
        Some("import") => {
            let path = args
                .get(1)
                .map(PathBuf::from)
                .ok_or(anyhow!("Usage: trade_journal import <trades.csv>"))?;
            run_configs::import_trades::run(&config, &path).await
        }
        Some(other) => Err(anyhow!(
            "Unknown command {:?}. Expected dashboard, guest or import <file>.",
            other
        )),
    }
}
