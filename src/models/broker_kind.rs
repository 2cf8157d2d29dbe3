use crate::{
    errors::{PortfolioError, PortfolioResult},
    models::broker::{BrokerCredentials, NewBroker},
    utils::constants::PLACEHOLDER_API_SECRET,
};
use std::{
    collections::BTreeMap,
    fmt::{Display, Formatter},
    str::FromStr,
};

/// Broker platforms that can be connected through the credential form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrokerKind {
    MetaTrader5,
    ZerodhaKite,
    Binance,
    InteractiveBrokers,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CredentialField {
    pub name: &'static str,
    pub label: &'static str,
    pub secret: bool,
}

const fn field(name: &'static str, label: &'static str, secret: bool) -> CredentialField {
    CredentialField {
        name,
        label,
        secret,
    }
}

static MT5_FIELDS: [CredentialField; 3] = [
    field("server", "Server", false),
    field("login", "Login ID", false),
    field("password", "Password", true),
];

static KITE_FIELDS: [CredentialField; 3] = [
    field("api_key", "API Key", false),
    field("api_secret", "API Secret", true),
    field("request_token", "Request Token", false),
];

static BINANCE_FIELDS: [CredentialField; 2] = [
    field("api_key", "API Key", false),
    field("api_secret", "API Secret", true),
];

static IB_FIELDS: [CredentialField; 3] = [
    field("username", "Username", false),
    field("password", "Password", true),
    field("account_id", "Account ID", false),
];

const MT5_MIN_LOGIN_LEN: usize = 6;

impl BrokerKind {
    pub const ALL: [BrokerKind; 4] = [
        Self::MetaTrader5,
        Self::ZerodhaKite,
        Self::Binance,
        Self::InteractiveBrokers,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::MetaTrader5 => "MetaTrader 5",
            Self::ZerodhaKite => "Zerodha Kite",
            Self::Binance => "Binance",
            Self::InteractiveBrokers => "Interactive Brokers",
        }
    }

    pub fn fields(&self) -> &'static [CredentialField] {
        match self {
            Self::MetaTrader5 => &MT5_FIELDS,
            Self::ZerodhaKite => &KITE_FIELDS,
            Self::Binance => &BINANCE_FIELDS,
            Self::InteractiveBrokers => &IB_FIELDS,
        }
    }

    /// Minimal shape check of the submitted credentials. This does not talk
    /// to the broker.
    pub fn validate(&self, credentials: &BTreeMap<String, String>) -> PortfolioResult<()> {
        let missing: Vec<&str> = self
            .fields()
            .iter()
            .filter(|f| {
                credentials
                    .get(f.name)
                    .map_or(true, |value| value.trim().is_empty())
            })
            .map(|f| f.label)
            .collect();

        if !missing.is_empty() {
            return Err(PortfolioError::Validation(format!(
                "All fields are required for {} (missing: {})",
                self.display_name(),
                missing.join(", ")
            )));
        }

        if let Self::MetaTrader5 = self {
            let login = credentials.get("login").map(|l| l.trim().len()).unwrap_or(0);
            if login < MT5_MIN_LOGIN_LEN {
                return Err(PortfolioError::Validation("Invalid login ID format".to_string()));
            }
        }

        Ok(())
    }

    /// Packs validated form values into a broker record. The values are
    /// stored as a JSON api key next to a placeholder secret.
    pub fn new_broker(&self, credentials: &BTreeMap<String, String>) -> PortfolioResult<NewBroker> {
        let api_key = serde_json::to_string(credentials).map_err(|e| {
            PortfolioError::Validation(format!("Unable to encode credentials: {}", e))
        })?;

        Ok(NewBroker {
            name: self.display_name().to_string(),
            credentials: BrokerCredentials {
                api_key,
                api_secret: PLACEHOLDER_API_SECRET.to_string(),
            },
        })
    }
}

impl Display for BrokerKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for BrokerKind {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|kind| kind.display_name().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| PortfolioError::UnknownBroker(s.to_string()))
    }
}
