use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenmofError {
    #[error("Please provide a design brief before generating candidates.")]
    EmptyBrief,

    #[error("Invalid design request: {0}")]
    InvalidRequest(String),

    #[error("Upload error: {0}")]
    Upload(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl GenmofError {
    /// True for errors caused by what the user typed, shown as a warning
    /// banner rather than a failure page.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, GenmofError::EmptyBrief | GenmofError::InvalidRequest(_))
    }
}

pub type Result<T> = std::result::Result<T, GenmofError>;

/// Error type returned by JSON handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Internal(String),
}

impl From<GenmofError> for ApiError {
    fn from(e: GenmofError) -> Self {
        match e {
            GenmofError::EmptyBrief | GenmofError::InvalidRequest(_) => {
                ApiError::Validation(e.to_string())
            }
            GenmofError::Upload(_) => ApiError::BadRequest(e.to_string()),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

/// Malformed JSON bodies get the same `{"error": ...}` shape as every other
/// API failure. Bodies that parse but carry bad values are validation errors.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(e) => ApiError::Validation(e.body_text()),
            other => ApiError::BadRequest(other.body_text()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
