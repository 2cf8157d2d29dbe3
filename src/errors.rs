use thiserror::Error;

pub type PortfolioResult<T> = Result<T, PortfolioError>;

#[derive(Debug, Error)]
pub enum PortfolioError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("trade {0} does not exist")]
    TradeNotFound(String),

    #[error("{0} is required to build a trade")]
    MissingField(&'static str),

    #[error("invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("malformed {table} row: {reason}")]
    MalformedRow { table: &'static str, reason: String },

    #[error("{0}")]
    Validation(String),

    #[error("unknown broker type: {0}")]
    UnknownBroker(String),

    #[error("csv import failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("{0} is not configured")]
    NotConfigured(&'static str),

    #[error("no authenticated user and guest mode is off")]
    NoSession,

    #[error("portfolio store is unavailable: {0}")]
    Mailbox(#[from] actix::MailboxError),
}

impl PortfolioError {
    /// True for errors that should be shown inline next to the form that
    /// triggered them rather than treated as backend failures.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation(_)
                | Self::UnknownBroker(_)
                | Self::MissingField(_)
                | Self::InvalidField { .. }
                | Self::Csv(_)
        )
    }
}
