use serde::Deserialize;

// =============================================================================
// Time-related constants
// =============================================================================

/// How long a cached server version stays fresh, in milliseconds (24 hours)
pub const VERSION_EXPIRATION_MS: i64 = 24 * 60 * 60 * 1000;

/// Timeout for version fetch requests in milliseconds (30 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 30_000;

/// Default user agent sent with version fetch requests
pub const DEFAULT_USER_AGENT: &str = "server-version-cache";

/// Configuration for the HTTP version fetchers
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct FetcherConfig {
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
    /// User agent header sent with each request
    pub user_agent: String,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            timeout_ms: FETCH_TIMEOUT_MS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
