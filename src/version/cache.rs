//! In-memory TTL cache for server versions
//!
//! Each URL maps to the last known version string and the time it was
//! established. An expired entry is refreshed on demand; a failed refresh
//! renews the old entry for another expiration window so that a transient
//! outage neither erases known-good data nor triggers a fetch attempt on
//! every subsequent call.

use dashmap::DashMap;
use tracing::{debug, warn};

use crate::config::VERSION_EXPIRATION_MS;
use crate::version::fetcher::VersionFetcher;

/// A server version together with the time it was established or last renewed
#[derive(Debug, Clone)]
struct CacheEntry {
    version: String,
    fetched_at_ms: i64,
}

impl CacheEntry {
    fn is_obsolete(&self, now_ms: i64) -> bool {
        now_ms - self.fetched_at_ms > VERSION_EXPIRATION_MS
    }
}

/// Per-URL cache of server versions with a fixed 24-hour expiration
///
/// Shared freely across tasks behind an `Arc`; all operations take `&self`.
/// Concurrent refreshes of the same URL are not coalesced: two callers that
/// both observe an expired entry both hit the fetcher, and the last writer
/// wins on the map update.
pub struct VersionCache<F> {
    entries: DashMap<String, CacheEntry>,
    fetcher: F,
}

impl<F: VersionFetcher> VersionCache<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            entries: DashMap::new(),
            fetcher,
        }
    }

    /// Get current timestamp in milliseconds since UNIX epoch
    fn current_timestamp_ms() -> i64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0)
    }

    /// Returns the server version for `url`, fetching it if the cached value
    /// is missing or older than the expiration window.
    ///
    /// Fetch failures never surface to the caller: with a prior value the old
    /// version is served and its window renewed, without one this returns
    /// `None`. An explicit "no version information" result from the fetcher
    /// leaves any expired entry untouched, so the next call retries.
    pub async fn get_version(&self, url: &str) -> Option<String> {
        let now_ms = Self::current_timestamp_ms();
        if let Some(entry) = self.entries.get(url) {
            if !entry.is_obsolete(now_ms) {
                return Some(entry.version.clone());
            }
        }

        // The map guard is dropped at this point; the fetch below may block
        // on I/O and must not hold up readers of other URLs.
        match self.fetcher.fetch_version(url).await {
            Ok(Some(version)) => {
                debug!("Fetched server version {} for {}", version, url);
                self.entries.insert(
                    url.to_string(),
                    CacheEntry {
                        version: version.clone(),
                        fetched_at_ms: Self::current_timestamp_ms(),
                    },
                );
                Some(version)
            }
            Ok(None) => {
                // An expired entry stays as-is and is retried on the next call
                debug!("No version information available for {}", url);
                None
            }
            Err(err) => {
                warn!("Failed to retrieve server version for {}: {}", url, err);
                // Renew the timestamp of the old value for now, buying another
                // expiration window before the next retry
                let mut entry = self.entries.get_mut(url)?;
                entry.fetched_at_ms = Self::current_timestamp_ms();
                Some(entry.version.clone())
            }
        }
    }
}
