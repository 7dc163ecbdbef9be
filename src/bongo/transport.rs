use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tracing::{debug, warn};

use super::error::TransportError;
use crate::config::ClientConfig;

/// Markers found in the HTML of Cloudflare interstitial/challenge pages.
const CHALLENGE_MARKERS: &[&str] = &[
    "Just a moment...",
    "cf-chl",
    "cf_chl_opt",
    "challenge-platform",
];

/// The outbound HTTP capability the generation client talks through.
///
/// Implementations return the raw response body. Anti-bot challenges must
/// surface as [`TransportError::Challenge`] so the client can tell them
/// apart from ordinary network failures.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn perform_get(
        &self,
        url: &str,
        params: &[(&str, &str)],
        headers: &BTreeMap<String, String>,
    ) -> Result<String, TransportError>;
}

/// `reqwest`-backed transport with connect and total timeouts.
///
/// Safe to share across tasks: the inner client is `Send + Sync` and holds
/// no per-request state.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration, connect_timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, TransportError> {
        Self::new(config.timeout(), config.connect_timeout())
    }
}

impl Transport for HttpTransport {
    async fn perform_get(
        &self,
        url: &str,
        params: &[(&str, &str)],
        headers: &BTreeMap<String, String>,
    ) -> Result<String, TransportError> {
        let response = self
            .client
            .get(url)
            .query(params)
            .headers(to_header_map(headers)?)
            .send()
            .await?;

        let status = response.status().as_u16();
        let reply_headers = response.headers().clone();
        let body = response.text().await?;
        debug!(status, bytes = body.len(), "received reply");

        if looks_like_challenge(status, &reply_headers, &body) {
            warn!(status, "reply is a bot challenge page");
            return Err(TransportError::Challenge { status });
        }

        // The service reports its own status inside the JSON body, so any
        // HTTP status that isn't a challenge is handed back as-is.
        Ok(body)
    }
}

fn to_header_map(headers: &BTreeMap<String, String>) -> Result<HeaderMap, TransportError> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| TransportError::InvalidHeader(format!("name {name:?}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|_| TransportError::InvalidHeader(format!("value for {name}")))?;
        map.insert(name, value);
    }
    Ok(map)
}

/// Decides whether a reply is a Cloudflare challenge rather than the service.
///
/// An explicit `cf-mitigated: challenge` header is conclusive. Otherwise the
/// reply must be a blocking status from Cloudflare whose body carries one of
/// the known challenge markers.
pub fn looks_like_challenge(status: u16, headers: &HeaderMap, body: &str) -> bool {
    let mitigated = headers
        .get("cf-mitigated")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.eq_ignore_ascii_case("challenge"));
    if mitigated {
        return true;
    }

    if !matches!(status, 403 | 429 | 503) {
        return false;
    }

    let from_cloudflare = headers.contains_key("cf-ray")
        || headers
            .get("server")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.eq_ignore_ascii_case("cloudflare"));

    from_cloudflare && CHALLENGE_MARKERS.iter().any(|m| body.contains(m))
}
