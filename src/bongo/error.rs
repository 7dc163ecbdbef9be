//! Failures raised by a [`Transport`](super::Transport).
//!
//! These never leave the crate's public generation path: the client maps
//! [`TransportError::Challenge`] to a connection error and everything else
//! to the generic error variant.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    /// The reply was an anti-bot challenge page instead of the service's JSON.
    #[error("bot challenge detected (status {status})")]
    Challenge { status: u16 },

    /// A configured header name or value is not valid HTTP.
    #[error("invalid header: {0}")]
    InvalidHeader(String),

    /// Underlying network failure (DNS, refused connection, timeout, body read).
    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),

    /// Failure reported by a non-HTTP transport implementation.
    #[error("{0}")]
    Other(String),
}

impl TransportError {
    pub fn is_challenge(&self) -> bool {
        matches!(self, TransportError::Challenge { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn challenge_display() {
        let err = TransportError::Challenge { status: 403 };
        assert_eq!(err.to_string(), "bot challenge detected (status 403)");
        assert!(err.is_challenge());
    }

    #[test]
    fn invalid_header_display() {
        let err = TransportError::InvalidHeader("bad name".into());
        assert_eq!(err.to_string(), "invalid header: bad name");
        assert!(!err.is_challenge());
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TransportError>();
    }
}
