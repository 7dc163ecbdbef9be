use tracing::{debug, warn};

use super::error::TransportError;
use super::transport::{HttpTransport, Transport};
use super::types::{AiResponse, GenerationParams, STATUS_OK, ServiceReply};
use crate::config::ClientConfig;
use crate::error::AiServiceError;
use crate::service::AiService;

const CHALLENGE_MESSAGE: &str = "Failed to bypass Cloudflare protection";

/// Client for the Bongo chat endpoint.
///
/// Holds the configuration and the transport; nothing changes between calls.
/// Whether one instance may be used from several tasks at once depends on
/// `T`. [`HttpTransport`] allows it.
pub struct BongoChatClient<T = HttpTransport> {
    transport: T,
    config: ClientConfig,
}

impl BongoChatClient<HttpTransport> {
    /// Builds a client over HTTP using `config`'s timeouts.
    pub fn from_config(config: ClientConfig) -> Result<Self, AiServiceError> {
        let transport = HttpTransport::from_config(&config)
            .map_err(|e| AiServiceError::Other(format!("failed to build HTTP client: {e}")))?;
        Ok(Self::with_config(transport, config))
    }
}

impl<T: Transport> BongoChatClient<T> {
    /// Client with the default endpoint, model and headers.
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, ClientConfig::default())
    }

    pub fn with_config(transport: T, config: ClientConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn request(&self, prompt: &str) -> Result<AiResponse, RequestFailure> {
        let params = GenerationParams::new(prompt, &self.config.model);
        debug!(model = params.model, prompt_chars = prompt.chars().count(), "sending prompt");

        let body = self
            .transport
            .perform_get(&self.config.base_url, &params.as_query(), &self.config.headers)
            .await?;

        let reply: ServiceReply = serde_json::from_str(&body)?;
        interpret(reply)
    }
}

impl<T: Transport> AiService for BongoChatClient<T> {
    async fn generate_response(&self, prompt: &str) -> Result<AiResponse, AiServiceError> {
        self.validate_prompt(prompt)?;

        match self.request(prompt).await {
            Ok(response) => {
                if let Some(error) = response.error() {
                    warn!(status = response.status_code(), error, "service reported an error");
                }
                Ok(response)
            }
            Err(RequestFailure::Transport(TransportError::Challenge { status })) => {
                warn!(status, "blocked by bot challenge");
                Err(AiServiceError::ServiceConnection(CHALLENGE_MESSAGE.into()))
            }
            Err(failure) => {
                warn!(error = %failure, "generation failed");
                Err(AiServiceError::Other(format!("Unexpected error: {failure}")))
            }
        }
    }
}

/// Everything that can go wrong after validation, before it is folded into
/// [`AiServiceError`].
#[derive(Debug, thiserror::Error)]
enum RequestFailure {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("malformed reply: {0}")]
    Json(#[from] serde_json::Error),

    #[error("reply is missing the `{0}` field")]
    MissingField(&'static str),
}

fn interpret(reply: ServiceReply) -> Result<AiResponse, RequestFailure> {
    if reply.status == STATUS_OK {
        let content = reply.response.ok_or(RequestFailure::MissingField("response"))?;
        Ok(AiResponse::ok(content))
    } else {
        let error = reply.error_type.ok_or(RequestFailure::MissingField("type"))?;
        Ok(AiResponse::failed(reply.status, error))
    }
}
