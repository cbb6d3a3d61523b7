//! Error types for twitchlink.

use thiserror::Error;

/// Result type alias using twitchlink's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed transport-level error, kept as the original source.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Main error type for twitchlink.
#[derive(Error, Debug)]
pub enum Error {
    // Negotiation errors
    #[error("Unable to obtain authorization (status {status}): {message}")]
    Authorization { status: u16, message: String },

    #[error("{channel} is offline")]
    ChannelOffline { channel: String },

    #[error("Manifest request failed with status {status}: {message}")]
    ManifestFetch { status: u16, message: String },

    #[error("No matching quality for {}", requested.join(", "))]
    QualityNotFound { requested: Vec<String> },

    // Network errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] HttpError),

    #[error("Transport error: {0}")]
    Transport(#[source] BoxError),

    // Upstream API errors
    #[error("API error: {0}")]
    Api(String),

    #[error("Failed to parse API response: {0}")]
    Parse(String),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Generic errors
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// HTTP-specific errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Request failed with status {status}: {message}")]
    StatusError { status: u16, message: String },

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl Error {
    /// Wrap an underlying transport error without altering it.
    pub fn transport<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Transport(Box::new(error))
    }

    /// Returns true if the manifest endpoint reported the channel as offline.
    pub const fn is_offline(&self) -> bool {
        matches!(self, Self::ChannelOffline { .. })
    }

    /// Returns true if this error is worth retrying by a caller.
    ///
    /// Nothing in twitchlink retries on its own.
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::Http(HttpError::ConnectionFailed(_) | HttpError::Timeout)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_offline() {
        let err = Error::ChannelOffline {
            channel: "somechannel".into(),
        };
        assert!(err.is_offline());
        assert_eq!(err.to_string(), "somechannel is offline");
        assert!(!Error::Api("test".into()).is_offline());
    }

    #[test]
    fn test_error_retryable() {
        assert!(Error::Http(HttpError::Timeout).is_retryable());
        assert!(!Error::InvalidArgument("test".into()).is_retryable());
        assert!(!Error::Authorization {
            status: 401,
            message: String::new()
        }
        .is_retryable());
    }

    #[test]
    fn test_quality_not_found_display() {
        let err = Error::QualityNotFound {
            requested: vec!["720p".into(), "nonexistent".into()],
        };
        assert_eq!(err.to_string(), "No matching quality for 720p, nonexistent");
    }
}
