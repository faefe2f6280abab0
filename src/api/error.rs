use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("malformed payload: {0}")]
    Payload(String),
    #[error("server reported failure: {0}")]
    Reported(String),
    #[error("request timed out after {}ms", .0.as_millis())]
    Timeout(Duration),
}

impl ApiError {
    /// True when no readable answer came back. A readable refusal is not offline.
    pub fn is_offline_failure(&self) -> bool {
        match self {
            Self::Transport(_) | Self::Timeout(_) | Self::Payload(_) => true,
            Self::Status(_) | Self::Reported(_) => false,
        }
    }
}
