pub mod client;
pub mod error;
pub mod transport;
pub mod types;

pub use client::BongoChatClient;
pub use error::TransportError;
pub use transport::{HttpTransport, Transport};
pub use types::{AiResponse, GenerationParams, STATUS_OK, ServiceReply};
