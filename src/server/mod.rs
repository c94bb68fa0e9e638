//! HTTP surface: a single `/analyze-pdf` route.
//!
//! The handler owns the whole contract - preflight, method guard, field
//! guard, configuration guard, and error mapping - because every response
//! path, including errors, must carry the permissive CORS origin header.
//! A CORS middleware layer only decorates requests that arrive with an
//! `Origin` header, which is weaker than what callers of this endpoint rely
//! on, so the headers are set explicitly here.

pub mod state;

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::any;
use axum::Router;
use serde::Deserialize;
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

pub use state::AppState;

use crate::analyze::analyze_document;

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/analyze-pdf", any(analyze_pdf))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Inbound request body. Both fields are optional at the serde level so the
/// handler can report the contractual 400 instead of an extractor rejection.
#[derive(Debug, Default, Deserialize)]
struct AnalyzeRequest {
    #[serde(default)]
    file_url: Option<String>,
    #[serde(default)]
    prompt: Option<String>,
}

async fn analyze_pdf(
    State(state): State<Arc<AppState>>,
    method: Method,
    body: Bytes,
) -> Response {
    if method == Method::OPTIONS {
        return preflight();
    }

    if method != Method::POST {
        return cors_json(
            StatusCode::METHOD_NOT_ALLOWED,
            json!({ "error": "Method not allowed" }),
        );
    }

    // Malformed JSON is treated the same as absent fields.
    let request: AnalyzeRequest = serde_json::from_slice(&body).unwrap_or_default();
    let (file_url, prompt) = match (request.file_url, request.prompt) {
        (Some(file_url), Some(prompt)) if !file_url.is_empty() && !prompt.is_empty() => {
            (file_url, prompt)
        }
        _ => {
            return cors_json(
                StatusCode::BAD_REQUEST,
                json!({ "error": "Missing file_url or prompt" }),
            )
        }
    };

    let Some(grok) = state.grok.as_ref() else {
        error!("Grok API key is not configured");
        return cors_json(
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({ "error": "Server configuration error: API key missing" }),
        );
    };

    info!(file_url = %file_url, prompt_len = prompt.len(), "received analyze request");

    match analyze_document(&state, grok, &file_url, &prompt).await {
        Ok(findings) => {
            info!(findings_len = findings.len(), "analysis complete");
            cors_json(StatusCode::OK, json!({ "findings": findings }))
        }
        Err(err) => {
            error!(error = ?err, "analyze request failed");
            let message = format!("{err:#}");
            let message = if message.is_empty() {
                "Internal server error".to_string()
            } else {
                message
            };
            cors_json(StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": message }))
        }
    }
}

/// 200 response for CORS preflight. No body processing happens for OPTIONS.
fn preflight() -> Response {
    let mut response = StatusCode::OK.into_response();
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("POST, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    response
}

/// JSON response with the permissive origin header every path must carry.
fn cors_json(status: StatusCode, body: serde_json::Value) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    response
}
