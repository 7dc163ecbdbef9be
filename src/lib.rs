//! Client for the Bongo chat text-generation endpoint.
//!
//! [`BongoChatClient`] validates a prompt, sends it as a browser-looking GET
//! request through a [`Transport`], and normalizes the JSON reply into an
//! [`AiResponse`]. Failures surface as [`AiServiceError`].

pub mod bongo;
pub mod config;
pub mod error;
pub mod service;

pub use bongo::{AiResponse, BongoChatClient, HttpTransport, Transport, TransportError};
pub use config::ClientConfig;
pub use error::AiServiceError;
pub use service::{AiService, prompt_from_bytes, prompt_from_value, validate_prompt};
