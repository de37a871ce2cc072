//! Server crate for the Golden Raspberry Awards API.
//!
//! This crate wires the catalog store and the interval analysis into an
//! axum router:
//! - `catalog`: the shared, lock-protected record store handle
//! - `api`: request handlers
//! - `api_error`: JSON error responses
//! - `config`: listen address and data path

pub mod api;
pub mod api_error;
pub mod catalog;
pub mod config;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

pub use catalog::{MovieCatalog, MovieFilter};
pub use config::ServerConfig;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<MovieCatalog>,
}

impl AppState {
    pub fn new(catalog: Arc<MovieCatalog>) -> Self {
        Self { catalog }
    }
}

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api::api_info))
        .route("/health", get(api::health_check))
        .route("/movies", get(api::list_movies).post(api::create_movie))
        .route(
            "/movies/{id}",
            get(api::get_movie)
                .put(api::replace_movie)
                .patch(api::patch_movie)
                .delete(api::delete_movie),
        )
        .route("/producers/awards-interval", get(api::awards_interval))
        .fallback(api::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
