//! Health check, API index and the catch-all route

use axum::{Json, http::Method, http::Uri};
use serde::Serialize;
use serde_json::{Value, json};

use crate::api_error::ApiError;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// GET /
///
/// Describes the service and lists its endpoints.
pub async fn api_info() -> Json<Value> {
    Json(json!({
        "name": "Golden Raspberry Awards API",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "REST API over Golden Raspberry Awards nominees and winners",
        "endpoints": {
            "movies": {
                "GET /movies": "List every movie",
                "GET /movies?year={year}": "List movies of one year",
                "GET /movies?winner=true": "List winners only",
                "GET /movies/{id}": "Get one movie",
                "POST /movies": "Create a movie",
                "PUT /movies/{id}": "Replace a movie",
                "PATCH /movies/{id}": "Partially update a movie",
                "DELETE /movies/{id}": "Delete a movie"
            },
            "producers": {
                "GET /producers/awards-interval": "Shortest and longest gaps between consecutive wins"
            },
            "health": {
                "GET /health": "Service status"
            }
        }
    }))
}

/// Fallback for unknown routes
pub async fn not_found(method: Method, uri: Uri) -> ApiError {
    ApiError::NotFound(format!("Route {} {} not found", method, uri.path()))
}
