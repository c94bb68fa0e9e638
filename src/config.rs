//! Configuration for the analysis relay.
//!
//! Everything is resolved once at process startup (CLI flags / environment)
//! and shared read-only with the request handlers. Nothing re-reads the
//! environment per request.

use std::time::Duration;

use crate::grok::AttachmentStrategy;

/// Default Grok API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.x.ai/v1";

/// Default model used for document analysis.
pub const DEFAULT_MODEL: &str = "grok-4-fast-reasoning";

/// Default total timeout for each outbound HTTP call.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Service configuration, assembled once in `main`.
#[derive(Debug, Clone)]
pub struct Config {
    /// Grok API key. `None` is tolerated at startup; the handler reports it
    /// as a configuration error so the service stays inspectable without
    /// credentials.
    pub api_key: Option<String>,
    /// Grok API base URL (no trailing slash).
    pub api_base: String,
    /// Model to request completions from.
    pub model: String,
    /// How the downloaded document is attached to the completion request.
    pub strategy: AttachmentStrategy,
    /// Total timeout for each outbound HTTP call.
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            strategy: AttachmentStrategy::default(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Base URL with any trailing slash removed, so endpoint paths can be
    /// appended unconditionally.
    pub fn api_base_trimmed(&self) -> &str {
        self.api_base.trim_end_matches('/')
    }
}
