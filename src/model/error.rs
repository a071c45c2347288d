use std::time::Duration;

use thiserror::Error;

/// The standard result type used throughout the application.
pub type StdResult<T> = Result<T, anyhow::Error>;

/// Fetcher error
#[derive(Error, Debug)]
pub enum FetcherError {
    /// The request could not be sent or its body could not be read.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The remote answered with a non-success status.
    #[error("Request to {url} failed with status {status}")]
    Status { status: u16, url: String },

    /// The response body could not be parsed.
    #[error("Parsing error: {0}")]
    Parse(String),

    /// The request did not settle in time.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),
}

impl From<reqwest::Error> for FetcherError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            return FetcherError::Transport(format!("timed out: {error}"));
        }
        match (error.status(), error.url()) {
            (Some(status), Some(url)) => FetcherError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            },
            _ if error.is_decode() => FetcherError::Parse(error.to_string()),
            _ => FetcherError::Transport(error.to_string()),
        }
    }
}
