use crate::{models::session::Session, utils::constants::DEFAULT_MAX_CONNECTIONS};
use anyhow::{anyhow, Result};
use std::{env, time::Duration};
use uuid::Uuid;

/// Runtime settings, read from the environment (and `.env` when present).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: Option<String>,
    pub max_connections: u32,
    pub user_id: Option<Uuid>,
    pub guest: bool,
    pub broker_validation_delay: Duration,
    pub run_migrations: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            user_id: None,
            guest: true,
            broker_validation_delay: Duration::from_secs(2),
            run_migrations: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let defaults = Self::default();

        let user_id = match env::var("JOURNAL_USER_ID") {
            Ok(raw) if !raw.trim().is_empty() => Some(
                Uuid::parse_str(raw.trim())
                    .map_err(|e| anyhow!("JOURNAL_USER_ID is not a valid uuid: {}", e))?,
            ),
            _ => None,
        };

        // Without a user there is nothing to load remotely, so default to guest.
        let guest = match env::var("JOURNAL_GUEST") {
            Ok(raw) => parse_flag("JOURNAL_GUEST", &raw)?,
            Err(_) => user_id.is_none(),
        };

        let max_connections = match env::var("DB_MAX_CONNECTIONS") {
            Ok(raw) => raw
                .parse()
                .map_err(|e| anyhow!("DB_MAX_CONNECTIONS must be a number: {}", e))?,
            Err(_) => defaults.max_connections,
        };

        let broker_validation_delay = match env::var("BROKER_VALIDATION_DELAY_MS") {
            Ok(raw) => Duration::from_millis(
                raw.parse()
                    .map_err(|e| anyhow!("BROKER_VALIDATION_DELAY_MS must be a number: {}", e))?,
            ),
            Err(_) => defaults.broker_validation_delay,
        };

        let run_migrations = match env::var("RUN_MIGRATIONS") {
            Ok(raw) => parse_flag("RUN_MIGRATIONS", &raw)?,
            Err(_) => defaults.run_migrations,
        };

        Ok(Self {
            database_url: env::var("DATABASE_URL").ok(),
            max_connections,
            user_id,
            guest,
            broker_validation_delay,
            run_migrations,
        })
    }

    pub fn session(&self) -> Session {
        Session {
            user_id: self.user_id,
            is_guest: self.guest,
        }
    }
}

fn parse_flag(name: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(anyhow!("{} must be a boolean, got {:?}", name, other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("true", true)]
    #[case("1", true)]
    #[case(" Yes ", true)]
    #[case("off", false)]
    #[case("", false)]
    fn parses_flags(#[case] raw: &str, #[case] expected: bool) {
        assert_eq!(parse_flag("FLAG", raw).unwrap(), expected);
    }

    #[test]
    fn rejects_garbage_flags() {
        assert!(parse_flag("FLAG", "maybe").is_err());
    }

    #[test]
    fn default_config_is_a_guest_session() {
        let config = AppConfig::default();
        let session = config.session();

        assert!(session.is_guest);
        assert!(session.user_id.is_none());
        assert_eq!(config.broker_validation_delay, Duration::from_secs(2));
    }
}
