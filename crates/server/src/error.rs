//! `ServerError` and its `StatusCode` mapping (`SPEC_FULL.md` §6, §7),
//! grounded on `crates/server/src/lib.rs::ServerError` for the
//! thiserror-enum-plus-`From<..> for StatusCode` shape, with the variant
//! set replaced by the seven `CoreError` kinds the spec names.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;

use interview_core::CoreError;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("persistence error: {0}")]
    Persistence(#[from] anyhow::Error),

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl From<&ServerError> for StatusCode {
    fn from(err: &ServerError) -> Self {
        match err {
            ServerError::Core(CoreError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ServerError::Core(CoreError::InvalidTransition { .. }) => StatusCode::BAD_REQUEST,
            ServerError::Core(CoreError::ValidationError(_)) => StatusCode::BAD_REQUEST,
            ServerError::Core(CoreError::AlreadyAnswered { .. }) => StatusCode::CONFLICT,
            ServerError::Core(CoreError::CollaboratorUnavailable { .. }) => StatusCode::SERVICE_UNAVAILABLE,
            ServerError::Core(CoreError::SessionClosed { .. }) => StatusCode::GONE,
            ServerError::Core(CoreError::InternalError(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ServerError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ServerError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = StatusCode::from(&self);
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(error = %self, "request rejected");
        }
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}
