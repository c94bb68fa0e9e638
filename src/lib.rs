//! Docsight - PDF analysis relay
//!
//! A single-endpoint HTTP service: POST a `file_url` and a `prompt` to
//! `/analyze-pdf`, and the service downloads the document, forwards it to the
//! Grok API with the prompt, and returns the model's findings as JSON.

pub mod analyze;
pub mod config;
pub mod grok;
pub mod server;

// Re-export key types
pub use config::Config;
pub use grok::{AttachmentStrategy, GrokClient};
pub use server::AppState;
