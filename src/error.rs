//! Error taxonomy exposed to callers of an [`AiService`](crate::AiService).
//!
//! Callers only ever see the three [`AiServiceError`] variants. Transport
//! failures are folded into them at the client boundary, and a well-formed
//! non-200 reply from the service is not an error at all: it comes back as
//! an [`AiResponse`](crate::AiResponse) with `error` set.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AiServiceError {
    /// The prompt failed local validation and was never sent.
    #[error("Invalid prompt: {0}")]
    InvalidPrompt(String),

    /// The transport could not get past the service's bot challenge.
    #[error("Service connection error: {0}")]
    ServiceConnection(String),

    /// Anything else: network failure, malformed body, missing fields.
    #[error("AI service error: {0}")]
    Other(String),
}

impl AiServiceError {
    pub fn is_invalid_prompt(&self) -> bool {
        matches!(self, AiServiceError::InvalidPrompt(_))
    }

    pub fn is_connection(&self) -> bool {
        matches!(self, AiServiceError::ServiceConnection(_))
    }

    /// The bare message, without the variant prefix added by `Display`.
    pub fn message(&self) -> &str {
        match self {
            AiServiceError::InvalidPrompt(msg)
            | AiServiceError::ServiceConnection(msg)
            | AiServiceError::Other(msg) => msg,
        }
    }
}
