use reqwest::StatusCode;
use thiserror::Error;

/// Fetching the remote article list failed.
///
/// Transport errors, non-success statuses and undecodable bodies all
/// surface as this one type.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("{url} returned {status}")]
    Status { url: String, status: StatusCode },
    #[error("invalid article list: {0}")]
    Decode(#[from] serde_json::Error),
}
