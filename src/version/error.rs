use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected status: {0}")]
    UnexpectedStatus(reqwest::StatusCode),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}
