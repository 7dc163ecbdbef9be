//! Client configuration loaded from `bongochat.toml`.
//!
//! [`ClientConfig`] holds everything that is fixed for the lifetime of a
//! client: endpoint, model, timeouts and the browser-identity header set.
//! Values missing from the file fall back to defaults. `BONGOCHAT_BASE_URL`
//! and `BONGOCHAT_MODEL` take precedence over the file.

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer};

pub const CONFIG_FILE: &str = "bongochat.toml";
pub const BASE_URL_ENV: &str = "BONGOCHAT_BASE_URL";
pub const MODEL_ENV: &str = "BONGOCHAT_MODEL";

pub const DEFAULT_BASE_URL: &str = "https://darkness.ashlynn.workers.dev/chat/";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

const BROWSER_HEADERS: &[(&str, &str)] = &[
    ("accept", "*/*"),
    ("accept-language", "en-US,en;q=0.6"),
    ("origin", "https://bongonetworkteambd.github.io"),
    ("priority", "u=1, i"),
    ("referer", "https://bongonetworkteambd.github.io/"),
    (
        "sec-ch-ua",
        r#""Brave";v="131", "Chromium";v="131", "Not_A Brand";v="24""#,
    ),
    ("sec-ch-ua-mobile", "?0"),
    ("sec-ch-ua-platform", r#""Windows""#),
    ("sec-fetch-dest", "empty"),
    ("sec-fetch-mode", "cors"),
    ("sec-fetch-site", "cross-site"),
    ("sec-gpc", "1"),
    (
        "user-agent",
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    ),
];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    /// Endpoint the GET request is sent to.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model identifier passed as the `model` query parameter.
    #[serde(default = "default_model")]
    pub model: String,

    /// Upper bound on the whole request, body included.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// Static headers attached to every request. Entries in the file are
    /// merged over the default browser set, keyed case-insensitively.
    #[serde(default = "default_headers", deserialize_with = "merge_headers")]
    pub headers: BTreeMap<String, String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_connect_timeout_secs() -> u64 {
    10
}

/// Desktop Brave/Chromium identity expected by the endpoint's bot filter.
pub fn default_headers() -> BTreeMap<String, String> {
    BROWSER_HEADERS
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn merge_headers<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let overrides = BTreeMap::<String, String>::deserialize(deserializer)?;
    let mut headers = default_headers();
    headers.extend(
        overrides
            .into_iter()
            .map(|(k, v)| (k.to_ascii_lowercase(), v)),
    );
    Ok(headers)
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            headers: default_headers(),
        }
    }
}

impl ClientConfig {
    /// Loads `bongochat.toml` from the current directory, or defaults if it
    /// doesn't exist, then applies environment overrides.
    pub fn load() -> Result<Self> {
        let path = Path::new(CONFIG_FILE);
        let mut config = if path.exists() {
            Self::parse_file(path)?
        } else {
            Self::default()
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Loads an explicitly named file. Unlike [`load`](Self::load), a
    /// missing file is an error.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let mut config = Self::parse_file(path.as_ref())?;
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    fn parse_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&contents).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Overrides base URL and model from `lookup`; empty values are ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(BASE_URL_ENV).filter(|v| !v.is_empty()) {
            self.base_url = url;
        }
        if let Some(model) = lookup(MODEL_ENV).filter(|v| !v.is_empty()) {
            self.model = model;
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_values() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://darkness.ashlynn.workers.dev/chat/");
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.timeout(), Duration::from_secs(60));
        assert_eq!(config.connect_timeout(), Duration::from_secs(10));
        assert_eq!(config.headers.len(), BROWSER_HEADERS.len());
        assert_eq!(
            config.headers["origin"],
            "https://bongonetworkteambd.github.io"
        );
    }

    #[test]
    fn deserialize_partial_toml() {
        let toml_str = r#"
            model = "gpt-4o"
            timeout_secs = 15
        "#;
        let config: ClientConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.timeout_secs, 15);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.headers, default_headers());
    }

    #[test]
    fn header_table_merges_over_defaults() {
        let toml_str = r#"
            [headers]
            User-Agent = "custom-agent/1.0"
            x-extra = "yes"
        "#;
        let config: ClientConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.headers["user-agent"], "custom-agent/1.0");
        assert_eq!(config.headers["x-extra"], "yes");
        assert_eq!(config.headers["accept"], "*/*");
        assert!(!config.headers.contains_key("User-Agent"));
    }

    #[test]
    fn overrides_win_over_file_values() {
        let mut config = ClientConfig::default();
        config.apply_overrides(|key| match key {
            BASE_URL_ENV => Some("http://localhost:9000/chat/".into()),
            MODEL_ENV => Some(String::new()),
            _ => None,
        });
        assert_eq!(config.base_url, "http://localhost:9000/chat/");
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    #[test]
    fn load_from_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_url = \"http://127.0.0.1:8080/\"").unwrap();
        writeln!(file, "connect_timeout_secs = 3").unwrap();
        let config = ClientConfig::load_from(file.path()).unwrap();
        assert_eq!(config.connect_timeout(), Duration::from_secs(3));
    }

    #[test]
    fn load_from_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = ClientConfig::load_from(dir.path().join("nope.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn load_falls_back_to_defaults() {
        // No bongochat.toml in the test working directory.
        let config = ClientConfig::load().unwrap();
        assert_eq!(config.timeout_secs, 60);
    }

    #[test]
    fn builder_helpers() {
        let config = ClientConfig::default()
            .with_model("gpt-4o")
            .with_base_url("http://localhost/")
            .with_timeout(5);
        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.base_url, "http://localhost/");
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }
}
