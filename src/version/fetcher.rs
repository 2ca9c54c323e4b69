//! Fetcher trait for retrieving server versions from remote services

#[cfg(test)]
use mockall::automock;

use crate::version::error::FetchError;

/// Trait for retrieving the version of a remote server
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait VersionFetcher: Send + Sync {
    /// Fetches the version of the server at `url`
    ///
    /// # Arguments
    /// * `url` - Base URL of the server (e.g., "https://gitlab.example.com")
    ///
    /// # Returns
    /// * `Ok(Some(version))` - Non-empty version string, freshly retrieved
    /// * `Ok(None)` - The server exposes no version information (not an error)
    /// * `Err(FetchError)` - The version could not be retrieved
    async fn fetch_version(&self, url: &str) -> Result<Option<String>, FetchError>;
}
