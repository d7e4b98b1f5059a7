use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single call to an external API.
///
/// Every variant is recoverable: fetch cycles log it and move on to the next
/// page, and the currency lookup turns it into "unknown".
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("data fetch failed with status {status}")]
    Status { status: StatusCode },
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("malformed response body: {0}")]
    Decode(#[source] reqwest::Error),
    #[error("no rate for currency {code}")]
    UnknownCurrency { code: String },
}

impl FetchError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            FetchError::Status { status } => Some(*status),
            _ => None,
        }
    }
}
