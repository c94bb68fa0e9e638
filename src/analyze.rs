//! The analysis pipeline.
//!
//! One linear pass per request: download the document, attach it to a
//! completion request per the configured strategy, and extract the findings.
//! The only detached work is the post-completion file cleanup, whose outcome
//! is deliberately discarded - it must never affect the response.

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::grok::{attachment, AttachmentStrategy, GrokClient};
use crate::server::AppState;

/// Filename reported to the vendor files endpoint for uploaded documents.
const UPLOAD_FILENAME: &str = "document.pdf";

/// Run the full validate-free pipeline for an already-validated request:
/// fetch -> (upload) -> chat -> findings. Any failure aborts the sequence.
pub async fn analyze_document(
    state: &AppState,
    grok: &GrokClient,
    file_url: &str,
    prompt: &str,
) -> Result<String> {
    let document = download(&state.http, file_url).await?;
    let config = &state.config;

    if !config.strategy.uploads_file() {
        let body = attachment::inline_body(&config.model, prompt, &document);
        return Ok(grok.chat(body).await?.findings());
    }

    // Upload failure aborts here; no completion call is attempted after it.
    let file_id = grok.upload(document, UPLOAD_FILENAME).await?;

    let body = if config.strategy == AttachmentStrategy::UploadAndReference {
        attachment::reference_body(&config.model, prompt, &file_id)
    } else {
        attachment::tool_call_body(&config.model, prompt)
    };
    let result = grok.chat(body).await;

    // Best-effort cleanup: fire-and-forget, the response is already decided.
    let grok = grok.clone();
    tokio::spawn(async move {
        if let Err(err) = grok.delete_file(&file_id).await {
            debug!(error = %err, file_id = %file_id, "uploaded file cleanup failed");
        }
    });

    Ok(result?.findings())
}

/// Download the caller-supplied file, failing on any non-success status.
async fn download(http: &reqwest::Client, file_url: &str) -> Result<Vec<u8>> {
    let response = http
        .get(file_url)
        .send()
        .await
        .context("Failed to download file")?;

    let status = response.status();
    info!(%status, "file fetch");

    if !status.is_success() {
        anyhow::bail!("Failed to download file: {}", status.as_u16());
    }

    let bytes = response
        .bytes()
        .await
        .context("Failed to read file body")?;
    Ok(bytes.to_vec())
}
