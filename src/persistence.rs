use crate::{
    config::AppConfig,
    errors::{PortfolioError, PortfolioResult},
    models::{
        database::{db::DB, demo_db::DemoDB},
        session::Session,
        traits::persistence_provider::PersistenceProvider,
    },
};
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

/// Picks the persistence backend for a session. This is the only place that
/// looks at the guest flag.
pub async fn connect_provider(
    session: &Session,
    config: &AppConfig,
) -> PortfolioResult<Arc<dyn PersistenceProvider>> {
    if session.is_guest {
        info!("Guest session, using sample data");
        return Ok(Arc::new(DemoDB::with_fixtures(Utc::now())));
    }

    let user_id = session.user_id.ok_or(PortfolioError::NoSession)?;
    let db = DB::new(config, user_id).await?;
    info!("Connected to database for user {}", user_id);

    Ok(Arc::new(db))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn guest_session_gets_demo_data() {
        let provider = connect_provider(&Session::guest(), &AppConfig::default())
            .await
            .unwrap();

        assert_eq!(provider.name(), "demo");
        assert_eq!(provider.fetch_trades().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn no_identity_and_no_guest_flag_is_an_error() {
        let session = Session {
            user_id: None,
            is_guest: false,
        };

        let res = connect_provider(&session, &AppConfig::default()).await;

        assert!(matches!(res, Err(PortfolioError::NoSession)));
    }

    #[tokio::test]
    async fn authenticated_session_needs_a_database_url() {
        let session = Session::authenticated(uuid::Uuid::new_v4());

        let res = connect_provider(&session, &AppConfig::default()).await;

        assert!(matches!(res, Err(PortfolioError::NotConfigured("DATABASE_URL"))));
    }
}
