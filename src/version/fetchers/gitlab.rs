//! GitLab version API fetcher

use std::time::Duration;

use serde::Deserialize;
use tracing::warn;

use crate::config::FetcherConfig;
use crate::version::error::FetchError;
use crate::version::fetcher::VersionFetcher;

/// Response from the GitLab version API
#[derive(Debug, Deserialize)]
struct VersionResponse {
    version: String,
}

/// Fetcher for GitLab servers, using `GET /api/v4/version`
pub struct GitLabFetcher {
    client: reqwest::Client,
}

impl GitLabFetcher {
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

impl Default for GitLabFetcher {
    fn default() -> Self {
        Self::new(&FetcherConfig::default())
    }
}

#[async_trait::async_trait]
impl VersionFetcher for GitLabFetcher {
    async fn fetch_version(&self, url: &str) -> Result<Option<String>, FetchError> {
        let endpoint = format!("{}/api/v4/version", url.trim_end_matches('/'));

        let response = self
            .client
            .get(&endpoint)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();

        // Older servers do not expose the version endpoint at all
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !status.is_success() {
            warn!("GitLab version API returned status {}: {}", status, endpoint);
            return Err(FetchError::UnexpectedStatus(status));
        }

        let body: VersionResponse = response.json().await.map_err(|e| {
            warn!("Failed to parse GitLab version response: {}", e);
            FetchError::InvalidResponse(e.to_string())
        })?;

        if body.version.is_empty() {
            return Ok(None);
        }

        Ok(Some(body.version))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[tokio::test]
    async fn fetch_version_returns_the_reported_version() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/api/v4/version")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"version": "16.4.1", "revision": "c0ffee1"}"#)
            .create_async()
            .await;

        let fetcher = GitLabFetcher::default();
        let result = fetcher.fetch_version(&server.url()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(result, Some("16.4.1".to_string()));
    }

    #[tokio::test]
    async fn fetch_version_returns_none_when_endpoint_is_missing() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/api/v4/version")
            .with_status(404)
            .with_body(r#"{"message": "404 Not Found"}"#)
            .create_async()
            .await;

        let fetcher = GitLabFetcher::default();
        let result = fetcher.fetch_version(&server.url()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn fetch_version_fails_on_server_error() {
        let mut server = Server::new_async().await;

        server
            .mock("GET", "/api/v4/version")
            .with_status(500)
            .create_async()
            .await;

        let fetcher = GitLabFetcher::default();
        let result = fetcher.fetch_version(&server.url()).await;

        assert!(matches!(
            result,
            Err(FetchError::UnexpectedStatus(status)) if status.as_u16() == 500
        ));
    }

    #[tokio::test]
    async fn fetch_version_fails_on_malformed_body() {
        let mut server = Server::new_async().await;

        server
            .mock("GET", "/api/v4/version")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("not json")
            .create_async()
            .await;

        let fetcher = GitLabFetcher::default();
        let result = fetcher.fetch_version(&server.url()).await;

        assert!(matches!(result, Err(FetchError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn fetch_version_treats_empty_version_as_absent() {
        let mut server = Server::new_async().await;

        server
            .mock("GET", "/api/v4/version")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"version": ""}"#)
            .create_async()
            .await;

        let fetcher = GitLabFetcher::default();
        let result = fetcher.fetch_version(&server.url()).await.unwrap();

        assert_eq!(result, None);
    }
}
