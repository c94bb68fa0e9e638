//! Document attachment strategies.
//!
//! The Grok API accepts a document in three ways: inlined as a base64 content
//! part, referenced by the id of a previously uploaded file, or retrieved by
//! the model itself through a declared tool. All three produce the same
//! observable contract, so the strategy is a configuration choice rather than
//! separate endpoints.

use std::fmt;
use std::str::FromStr;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// How the downloaded document is carried in the completion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttachmentStrategy {
    /// Base64-encode the bytes into a document content part. One API call,
    /// nothing to clean up.
    #[default]
    Inline,
    /// Upload the file first, then reference its id in a root-level
    /// `file_ids` list. The upload is deleted best-effort afterwards.
    UploadAndReference,
    /// Upload the file first, then declare a `document_search` tool and let
    /// the model retrieve the document itself. Same cleanup as
    /// `UploadAndReference`.
    UploadAndToolCall,
}

impl AttachmentStrategy {
    /// Display name, also the accepted CLI spelling.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Inline => "inline",
            Self::UploadAndReference => "upload-and-reference",
            Self::UploadAndToolCall => "upload-and-tool-call",
        }
    }

    /// Get all available strategies.
    pub fn all() -> Vec<Self> {
        vec![
            Self::Inline,
            Self::UploadAndReference,
            Self::UploadAndToolCall,
        ]
    }

    /// Whether this strategy requires an upload to the vendor files endpoint
    /// before the completion call (and a cleanup after it).
    pub fn uploads_file(&self) -> bool {
        !matches!(self, Self::Inline)
    }
}

impl fmt::Display for AttachmentStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AttachmentStrategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|strategy| strategy.name() == s)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "unknown attachment strategy '{}' (expected one of: inline, upload-and-reference, upload-and-tool-call)",
                    s
                )
            })
    }
}

/// Completion request with the document inlined as a base64 content part
/// alongside the prompt text.
pub fn inline_body(model: &str, prompt: &str, document: &[u8]) -> Value {
    json!({
        "model": model,
        "messages": [
            {
                "role": "user",
                "content": [
                    { "type": "text", "text": prompt },
                    {
                        "type": "document",
                        "source": {
                            "type": "base64",
                            "media_type": "application/pdf",
                            "data": BASE64.encode(document)
                        }
                    }
                ]
            }
        ]
    })
}

/// Completion request referencing an uploaded file through the root-level
/// `file_ids` list.
pub fn reference_body(model: &str, prompt: &str, file_id: &str) -> Value {
    json!({
        "model": model,
        "messages": [
            { "role": "user", "content": prompt }
        ],
        "file_ids": [file_id]
    })
}

/// Completion request declaring a `document_search` tool with automatic tool
/// choice. The uploaded file is not referenced directly; the model is expected
/// to retrieve it through the tool.
pub fn tool_call_body(model: &str, prompt: &str) -> Value {
    json!({
        "model": model,
        "messages": [
            { "role": "user", "content": prompt }
        ],
        "tools": [
            {
                "type": "function",
                "function": {
                    "name": "document_search",
                    "description": "Search the uploaded document for passages relevant to a query",
                    "parameters": {
                        "type": "object",
                        "properties": {
                            "query": {
                                "type": "string",
                                "description": "Search query"
                            }
                        },
                        "required": ["query"]
                    }
                }
            }
        ],
        "tool_choice": "auto"
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_name_round_trip() {
        for strategy in AttachmentStrategy::all() {
            assert_eq!(strategy.name().parse::<AttachmentStrategy>().unwrap(), strategy);
        }
    }

    #[test]
    fn test_strategy_rejects_unknown_name() {
        assert!("upload".parse::<AttachmentStrategy>().is_err());
    }

    #[test]
    fn test_only_inline_skips_upload() {
        assert!(!AttachmentStrategy::Inline.uploads_file());
        assert!(AttachmentStrategy::UploadAndReference.uploads_file());
        assert!(AttachmentStrategy::UploadAndToolCall.uploads_file());
    }

    #[test]
    fn test_inline_body_embeds_base64_document() {
        let body = inline_body("grok-4-fast-reasoning", "Summarize this", b"%PDF-1.4 test");

        assert_eq!(body["model"], "grok-4-fast-reasoning");
        let content = &body["messages"][0]["content"];
        assert_eq!(content[0]["type"], "text");
        assert_eq!(content[0]["text"], "Summarize this");
        assert_eq!(content[1]["type"], "document");
        assert_eq!(content[1]["source"]["type"], "base64");
        assert_eq!(content[1]["source"]["media_type"], "application/pdf");
        assert_eq!(content[1]["source"]["data"], BASE64.encode(b"%PDF-1.4 test"));
    }

    #[test]
    fn test_reference_body_carries_file_ids() {
        let body = reference_body("grok-4-fast-reasoning", "Summarize this", "file-123");

        assert_eq!(body["messages"][0]["content"], "Summarize this");
        assert_eq!(body["file_ids"], json!(["file-123"]));
        assert!(body.get("tools").is_none());
    }

    #[test]
    fn test_tool_call_body_declares_document_search() {
        let body = tool_call_body("grok-4-fast-reasoning", "Summarize this");

        assert_eq!(body["tools"][0]["function"]["name"], "document_search");
        assert_eq!(body["tool_choice"], "auto");
        // The file travels via the upload, not the request body.
        assert!(body.get("file_ids").is_none());
    }
}
