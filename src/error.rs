use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::parse::ParseError;
use crate::response::ErrorBody;

pub const INVALID_INPUT_MESSAGE: &str = "분석할 내용을 입력해주세요.";
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method not allowed";
pub const PAYLOAD_TOO_LARGE_MESSAGE: &str = "Payload too large";
pub const MISSING_CREDENTIAL_MESSAGE: &str = "API 키가 설정되지 않았습니다.";
pub const UPSTREAM_FAILURE_MESSAGE: &str = "AI 분석 중 오류가 발생했습니다.";
pub const RETRY_MESSAGE: &str = "AI 분석 중 오류가 발생했습니다. 잠시 후 다시 시도해주세요.";

#[derive(Debug, Error)]
pub enum SiftError {
    #[error("userInput missing or empty")]
    InvalidInput,

    #[error("method not allowed: {0}")]
    MethodNotAllowed(String),

    #[error("request body exceeds the size limit")]
    PayloadTooLarge,

    #[error("OPENAI_API_KEY is not configured")]
    MissingCredential,

    #[error("upstream error: {message}")]
    Upstream {
        message: String,
        status: Option<u16>,
    },

    #[error("schema parse error: {0}")]
    SchemaParse(String),

    #[error("completion is not JSON: {0}")]
    Parse(#[from] ParseError),

    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("{0}")]
    Other(String),
}

impl SiftError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidInput => StatusCode::BAD_REQUEST,
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Produce the message returned to the caller.
    /// Never includes upstream bodies or transport detail; those stay in the logs.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidInput => INVALID_INPUT_MESSAGE,
            Self::MethodNotAllowed(_) => METHOD_NOT_ALLOWED_MESSAGE,
            Self::PayloadTooLarge => PAYLOAD_TOO_LARGE_MESSAGE,
            Self::MissingCredential => MISSING_CREDENTIAL_MESSAGE,
            // A status means the provider answered and refused; anything else
            // (body too large, connection reset) is treated as unexpected.
            Self::Upstream { status: Some(_), .. } => UPSTREAM_FAILURE_MESSAGE,
            Self::Upstream { status: None, .. }
            | Self::SchemaParse(_)
            | Self::Parse(_)
            | Self::Request(_)
            | Self::Other(_) => RETRY_MESSAGE,
        }
    }
}

impl IntoResponse for SiftError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "analyze failed: {self}");
        } else {
            tracing::debug!(status = status.as_u16(), "analyze rejected: {self}");
        }
        (status, Json(ErrorBody::new(self.user_message()))).into_response()
    }
}
