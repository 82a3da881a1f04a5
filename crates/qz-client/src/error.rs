use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a call to the topics resource.
///
/// Callers treat every variant the same way; the variants only keep the
/// cause around for logging.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("unexpected response status: {0}")]
    Status(StatusCode),
    #[error("malformed response body: {0}")]
    Decode(#[source] reqwest::Error),
    #[error("invalid API URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl TransportError {
    /// HTTP status of the failed response, if the server answered at all
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status(status) => Some(*status),
            Self::Network(err) => err.status(),
            Self::Decode(_) | Self::InvalidUrl { .. } => None,
        }
    }
}
