//! Docsight server
//!
//! Serves `/analyze-pdf`: downloads a caller-supplied PDF, relays it with a
//! prompt to the Grok API, and returns the findings as JSON.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use docsight::{config, server, AppState, AttachmentStrategy, Config};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "docsight")]
#[command(about = "PDF analysis relay backed by the Grok API")]
#[command(version)]
struct Cli {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "8005")]
    port: u16,

    /// Grok API key
    #[arg(long, env = "XAI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Grok API base URL
    #[arg(long, env = "GROK_API_BASE", default_value = config::DEFAULT_API_BASE)]
    api_base: String,

    /// Model to request completions from
    #[arg(long, env = "GROK_MODEL", default_value = config::DEFAULT_MODEL)]
    model: String,

    /// Document attachment strategy: inline, upload-and-reference, or
    /// upload-and-tool-call
    #[arg(long, env = "DOCSIGHT_STRATEGY", default_value = "inline")]
    strategy: AttachmentStrategy,

    /// Total timeout for each outbound HTTP call, in seconds
    #[arg(long, default_value_t = config::DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("docsight=info,tower_http=info")),
        )
        .init();

    let cli = Cli::parse();

    if cli.api_key.is_none() {
        tracing::warn!(
            "XAI_API_KEY is not set; analyze requests will fail with a configuration error"
        );
    }

    let config = Config {
        api_key: cli.api_key,
        api_base: cli.api_base,
        model: cli.model,
        strategy: cli.strategy,
        timeout: Duration::from_secs(cli.timeout_secs),
    };
    tracing::info!(strategy = %config.strategy, model = %config.model, "starting");

    let state = Arc::new(AppState::new(config)?);
    let app = server::router(state);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", cli.host, cli.port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", cli.host, cli.port))?;
    tracing::info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
