//! Grok API client.
//!
//! Thin reqwest wrapper over the three endpoints the service touches:
//! chat completions, file upload, and file delete.

use anyhow::{Context, Result};
use reqwest::multipart;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

/// Returned when the completion response carries no usable message content.
pub const NO_FINDINGS: &str = "No detailed analysis returned";

/// Grok API client configuration and state.
#[derive(Clone)]
pub struct GrokClient {
    client: Client,
    api_base: String,
    api_key: String,
}

impl GrokClient {
    pub fn new(client: Client, api_base: String, api_key: String) -> Self {
        Self {
            client,
            api_base,
            api_key,
        }
    }

    /// Send a chat completion request. `body` is the full request payload as
    /// built by the active attachment strategy.
    pub async fn chat(&self, body: Value) -> Result<ChatResponse> {
        let response = self
            .client
            .post(format!("{}/chat/completions", self.api_base))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .context("Failed to send chat completion request")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!("Analysis failed: {} - {}", status.as_u16(), error_text);
        }

        response
            .json()
            .await
            .context("Failed to parse chat completion response")
    }

    /// Upload a file to the vendor files endpoint and return its id.
    pub async fn upload(&self, bytes: Vec<u8>, filename: &str) -> Result<String> {
        let part = multipart::Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str("application/pdf")
            .context("Invalid upload mime type")?;
        let form = multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(format!("{}/files", self.api_base))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .multipart(form)
            .send()
            .await
            .context("Failed to send file upload request")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!("File upload failed: {} - {}", status.as_u16(), error_text);
        }

        let uploaded: UploadResponse = response
            .json()
            .await
            .context("Failed to parse file upload response")?;
        Ok(uploaded.id)
    }

    /// Delete an uploaded file. Callers on the analysis path treat this as
    /// best-effort and discard the result.
    pub async fn delete_file(&self, file_id: &str) -> Result<()> {
        let response = self
            .client
            .delete(format!("{}/files/{}", self.api_base, file_id))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await
            .context("Failed to send file delete request")?;

        if !response.status().is_success() {
            anyhow::bail!("File delete failed: {}", response.status().as_u16());
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Grok DTOs (Data Transfer Objects)
// -----------------------------------------------------------------------------

/// Chat completion response. Only the content path the service reads is
/// modeled; every level is optional because the findings extraction must
/// tolerate an absent path.
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Default, Deserialize)]
struct Choice {
    #[serde(default)]
    message: ChoiceMessage,
}

#[derive(Debug, Default, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl ChatResponse {
    /// Extract the findings text from the first choice, falling back to the
    /// fixed placeholder when the content path is absent or empty.
    pub fn findings(self) -> String {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .unwrap_or_else(|| NO_FINDINGS.to_string())
    }
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    id: String,
}
