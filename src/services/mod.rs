//! Services module - Coordinatore per tutti i service handler HTTP
//!
//! Ogni modulo gestisce gli endpoint HTTP per una specifica risorsa.

pub mod director;
pub mod genre;
pub mod movie;

// Re-exports per facilitare l'import
pub use director::{create_director, get_director_by_id, list_directors};
pub use genre::{create_genre, list_genre_movie_titles, list_genres};
pub use movie::{create_movie, delete_movie, get_movies_by_selector, list_movies, update_movie};

use crate::core::AppError;
use axum::{http::StatusCode, response::IntoResponse};
use tracing::warn;

/// Root endpoint - health check
pub async fn root() -> impl IntoResponse {
    (StatusCode::OK, "Server is running!")
}

/// Qualsiasi path non registrato
pub async fn fallback(uri: axum::http::Uri) -> AppError {
    warn!("No route for {}", uri);
    AppError::not_found("Route not found")
}
