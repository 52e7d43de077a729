use std::any::Any;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, State};
use axum::extract::rejection::BytesRejection;
use axum::http::{HeaderValue, Method, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use axum::{Json, Router};
use serde::Deserialize;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CredentialSource;
use crate::dispatch::{CompletionClient, ProviderRequest};
use crate::error::SiftError;
use crate::parse::extract_json;
use crate::prompt::RESPONSE_KEYS;
use crate::response::ErrorBody;

/// Largest accepted request body; bigger bodies get 413.
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Shared, immutable handler dependencies.
#[derive(Clone)]
pub struct AppState {
    pub credentials: Arc<dyn CredentialSource>,
    pub completions: Arc<dyn CompletionClient>,
}

impl AppState {
    pub fn new(
        credentials: impl CredentialSource + 'static,
        completions: impl CompletionClient + 'static,
    ) -> Self {
        Self {
            credentials: Arc::new(credentials),
            completions: Arc::new(completions),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeRequest {
    #[serde(default)]
    user_input: Option<String>,
}

/// Builds the router. Every response, including 404s and panics, carries the
/// permissive CORS headers.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/analyze", any(analyze))
        .route("/api/analyze", any(analyze))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("POST, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
        .with_state(state)
}

/// `/analyze` — run the user's text through the critical-thinking prompt.
///
/// `OPTIONS` answers the CORS preflight with an empty 200. `POST` expects
/// `{"userInput": "..."}` and returns the model's JSON verbatim.
pub async fn analyze(
    State(state): State<AppState>,
    method: Method,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, SiftError> {
    if method == Method::OPTIONS {
        return Ok(StatusCode::OK.into_response());
    }
    if method != Method::POST {
        return Err(SiftError::MethodNotAllowed(method.to_string()));
    }

    let body = body.map_err(|e| {
        tracing::debug!("unreadable request body: {e}");
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            SiftError::PayloadTooLarge
        } else {
            SiftError::InvalidInput
        }
    })?;
    let user_text = user_input(&body)?;

    let api_key = state
        .credentials
        .api_key()
        .filter(|key| !key.is_empty())
        .ok_or(SiftError::MissingCredential)?;

    tracing::info!(chars = user_text.chars().count(), "analyzing input");

    let req = ProviderRequest::analysis(api_key, user_text);
    let completion = state.completions.complete(&req).await?;
    let value = extract_json(&completion)?;

    let missing: Vec<&str> = RESPONSE_KEYS
        .into_iter()
        .filter(|key| value.get(*key).is_none())
        .collect();
    if !missing.is_empty() {
        tracing::debug!(?missing, "completion lacks expected sections");
    }

    Ok(Json(value).into_response())
}

fn user_input(body: &[u8]) -> Result<String, SiftError> {
    let request: AnalyzeRequest =
        serde_json::from_slice(body).map_err(|_| SiftError::InvalidInput)?;
    request
        .user_input
        .filter(|text| !text.trim().is_empty())
        .ok_or(SiftError::InvalidInput)
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(ErrorBody::new("Not found")))
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    SiftError::Other(format!("handler panicked: {detail}")).into_response()
}
