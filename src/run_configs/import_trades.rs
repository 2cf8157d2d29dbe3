use crate::{
    config::AppConfig,
    models::{
        message_payloads::{
            import_trades_payload::ImportTradesPayload, refresh_payload::RefreshPayload,
            snapshot_payload::SnapshotPayload,
        },
        portfolio_store::PortfolioStore,
    },
    persistence::connect_provider,
    run_configs::report::print_dashboard,
};
use actix::Actor;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

/// Imports a broker CSV export into the configured session and prints the
/// resulting dashboard.
pub async fn run(config: &AppConfig, path: &Path) -> Result<()> {
    let csv = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Unable to read {}", path.display()))?;

    let provider = connect_provider(&config.session(), config).await?;
    let store = PortfolioStore::new(provider, config.broker_validation_delay).start();

    // Brokers must be loaded so rows without a broker get the default one.
    store.send(RefreshPayload).await?;

    let imported = store.send(ImportTradesPayload { csv }).await??;
    info!("Imported {} trades from {}", imported, path.display());

    let snapshot = store.send(SnapshotPayload).await?;
    print_dashboard(&snapshot);

    Ok(())
}
