//! Typed API error for HTTP handlers.
//!
//! Handlers return `Result<_, ApiError>`; every error leaves the server as
//! a JSON body `{"error": "message"}` with the matching status code.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request: invalid id, query parameter or body
    BadRequest(String),
    /// 404 Not Found: unknown record or route
    NotFound(String),
    /// 500 Internal Server Error. Details are logged, not exposed.
    Internal(anyhow::Error),
}

impl ApiError {
    pub fn invalid_id() -> Self {
        Self::BadRequest("Invalid ID parameter".to_owned())
    }

    pub fn movie_not_found() -> Self {
        Self::NotFound("Movie not found".to_owned())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::Internal(err) => {
                tracing::error!(error = ?err, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_owned())
            }
        };
        let body = serde_json::json!({ "error": message });
        (status, Json(body)).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}
