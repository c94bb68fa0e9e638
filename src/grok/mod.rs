//! Grok API layer.
//!
//! This module owns every interaction with the vendor API:
//! - `client` - the reqwest-based `GrokClient` (chat, file upload, file delete)
//! - `attachment` - how a document travels inside a completion request

pub mod attachment;
pub mod client;

// Re-export key types
pub use attachment::AttachmentStrategy;
pub use client::{ChatResponse, GrokClient};
