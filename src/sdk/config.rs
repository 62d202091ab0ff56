use crate::sdk::fare::provider::DEFAULT_MODEL;
use crate::sdk::fare::FareError;
use std::env;
use std::time::Duration;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_RELAY_URL: &str = "http://localhost:8080";
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

/// Relay settings, read once at startup. A missing API key is a
/// configuration failure and refuses to start the server; it is never
/// reported as a generic runtime error.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub api_key: String,
    pub model: String,
    pub bind_addr: String,
    pub upstream_timeout: Duration,
}

impl RelayConfig {
    pub fn from_env() -> Result<Self, FareError> {
        let api_key = env::var("GEMINI_API_KEY").map_err(|_| FareError::Misconfigured)?;
        if api_key.trim().is_empty() {
            return Err(FareError::Misconfigured);
        }

        let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let bind_addr =
            env::var("JATRA_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let upstream_timeout = env::var("JATRA_UPSTREAM_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS));

        Ok(Self {
            api_key,
            model,
            bind_addr,
            upstream_timeout,
        })
    }
}

/// Where the CLI client finds the relay.
pub fn relay_url_from_env() -> String {
    env::var("JATRA_RELAY_URL").unwrap_or_else(|_| DEFAULT_RELAY_URL.to_string())
}
