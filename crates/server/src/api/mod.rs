//! HTTP API handlers

pub mod health;
pub mod movies;
pub mod producers;

pub use health::{api_info, health_check, not_found};
pub use movies::{create_movie, delete_movie, get_movie, list_movies, patch_movie, replace_movie};
pub use producers::awards_interval;
