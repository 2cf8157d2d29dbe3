pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Ids handed out by the in-memory provider. Remote ids are uuids, so the
/// two never collide.
pub const GUEST_ID_PREFIX: &str = "sample-";

pub const PLACEHOLDER_API_SECRET: &str = "encrypted_credentials";

pub const RECENT_TRADES_LIMIT: usize = 5;
