//! Bitbucket Server version fetcher

use std::time::Duration;

use serde::Deserialize;
use tracing::warn;

use crate::config::FetcherConfig;
use crate::version::error::FetchError;
use crate::version::fetcher::VersionFetcher;

/// Response from the Bitbucket Server application-properties API
#[derive(Debug, Deserialize)]
struct ApplicationProperties {
    version: Option<String>,
}

/// Fetcher for Bitbucket Server, using `GET /rest/api/1.0/application-properties`
pub struct BitbucketFetcher {
    client: reqwest::Client,
}

impl BitbucketFetcher {
    pub fn new(config: &FetcherConfig) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(&config.user_agent)
                .timeout(Duration::from_millis(config.timeout_ms))
                .build()
                .expect("Failed to create HTTP client"),
        }
    }
}

impl Default for BitbucketFetcher {
    fn default() -> Self {
        Self::new(&FetcherConfig::default())
    }
}

#[async_trait::async_trait]
impl VersionFetcher for BitbucketFetcher {
    async fn fetch_version(&self, url: &str) -> Result<Option<String>, FetchError> {
        let endpoint = format!(
            "{}/rest/api/1.0/application-properties",
            url.trim_end_matches('/')
        );

        let response = self
            .client
            .get(&endpoint)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !status.is_success() {
            warn!(
                "Bitbucket application-properties API returned status {}: {}",
                status, endpoint
            );
            return Err(FetchError::UnexpectedStatus(status));
        }

        let body: ApplicationProperties = response.json().await.map_err(|e| {
            warn!("Failed to parse Bitbucket application-properties response: {}", e);
            FetchError::InvalidResponse(e.to_string())
        })?;

        // Bitbucket Cloud responds without a version field; only Server
        // deployments report one
        Ok(body.version.filter(|v| !v.is_empty()))
    }
}
