//! Server application state

use anyhow::{Context, Result};

use crate::config::Config;
use crate::grok::GrokClient;

/// Shared application state for the route handlers. Read-only after
/// construction; concurrent requests share nothing mutable.
pub struct AppState {
    /// Client for downloading caller-supplied files. Shares its connection
    /// pool and timeout with the Grok client.
    pub http: reqwest::Client,
    /// `None` when no API key is configured; no vendor client exists then,
    /// so nothing can send an empty bearer token upstream. The handler
    /// reports the absence as a configuration error.
    pub grok: Option<GrokClient>,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to build HTTP client")?;

        let grok = config.api_key.clone().map(|api_key| {
            GrokClient::new(http.clone(), config.api_base_trimmed().to_string(), api_key)
        });

        Ok(Self { http, grok, config })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_vendor_client_without_api_key() {
        let state = AppState::new(Config::default()).unwrap();
        assert!(state.grok.is_none());
    }

    #[test]
    fn test_vendor_client_built_when_key_present() {
        let config = Config {
            api_key: Some("test-key".to_string()),
            ..Config::default()
        };
        let state = AppState::new(config).unwrap();
        assert!(state.grok.is_some());
    }
}
