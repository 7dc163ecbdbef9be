//! Data types for the Bongo chat endpoint.
//!
//! [`GenerationParams`] is what goes out as the query string, [`ServiceReply`]
//! is what the endpoint sends back, and [`AiResponse`] is the normalized
//! record handed to callers.

use serde::{Deserialize, Serialize};

/// Status the service reports in its JSON body on success.
pub const STATUS_OK: u16 = 200;

/// Query parameters for one generation call. Built fresh per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationParams<'a> {
    pub prompt: &'a str,
    pub model: &'a str,
}

impl<'a> GenerationParams<'a> {
    pub fn new(prompt: &'a str, model: &'a str) -> Self {
        Self { prompt, model }
    }

    /// Query pairs in the order the endpoint expects them.
    pub fn as_query(&self) -> [(&'a str, &'a str); 2] {
        [("prompt", self.prompt), ("model", self.model)]
    }
}

/// Body returned by the endpoint.
///
/// `response` is present when `status` is 200; otherwise `type` carries a
/// short error description such as `"rate_limited"`.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceReply {
    pub status: u16,
    #[serde(default)]
    pub response: Option<String>,
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
}

/// Normalized result of a generation call.
///
/// A record with status 200 always has `error == None`; any other status
/// has empty `content` and `error` set. The constructors are the only way
/// to build one, so the pairing cannot be broken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AiResponse {
    content: String,
    status_code: u16,
    error: Option<String>,
}

impl AiResponse {
    pub fn ok(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            status_code: STATUS_OK,
            error: None,
        }
    }

    /// An in-band failure reported by the service itself.
    pub fn failed(status_code: u16, error: impl Into<String>) -> Self {
        Self {
            content: String::new(),
            status_code,
            error: Some(error.into()),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_ok(&self) -> bool {
        self.status_code == STATUS_OK
    }

    pub fn into_content(self) -> String {
        self.content
    }
}
