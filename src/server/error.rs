use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::error;

use crate::error::{ParseActionError, SessionError};

const LOG_TARGET: &str = "blackjack_duel::server::error";

/// Failures reported to HTTP clients.
#[derive(Debug)]
pub enum ApiError {
    /// Missing or malformed request parameters.
    BadRequest(String),
    /// No game under the given id.
    UnknownSession,
    /// Anything the client cannot fix.
    Internal(String),
}

impl ApiError {
    /// Builds a 400 response with `message`.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    /// Builds a 500 response with `message`.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl From<ParseActionError> for ApiError {
    fn from(err: ParseActionError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::UnknownSession => Self::UnknownSession,
            SessionError::Action(action) => Self::BadRequest(action.to_string()),
            SessionError::ShoeExhausted => Self::internal("deck is empty"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            Self::UnknownSession => (StatusCode::NOT_FOUND, "unknown game id".to_owned()),
            Self::Internal(message) => {
                error!(target: LOG_TARGET, %message, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
