use crate::{
    config::AppConfig,
    models::{
        message_payloads::{refresh_payload::RefreshPayload, snapshot_payload::SnapshotPayload},
        portfolio_store::PortfolioStore,
        session::Session,
    },
    persistence::connect_provider,
    run_configs::report::print_dashboard,
};
use actix::Actor;
use anyhow::Result;

/// Loads the session's portfolio once and prints the dashboard.
pub async fn run(config: &AppConfig, session: Session) -> Result<()> {
    let provider = connect_provider(&session, config).await?;
    let store = PortfolioStore::new(provider, config.broker_validation_delay).start();

    store.send(RefreshPayload).await?;
    let snapshot = store.send(SnapshotPayload).await?;

    print_dashboard(&snapshot);

    Ok(())
}
