//! Movie catalog library - espone i moduli principali per i test

pub mod core;
pub mod dtos;
pub mod entities;
pub mod repositories;
pub mod services;

// Re-export dei tipi principali per facilitare l'import
pub use crate::core::{AppError, AppState, config};
pub use services::root;

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Crea il router principale dell'applicazione
pub fn create_router(state: Arc<AppState>) -> Router {
    use services::fallback;

    Router::new()
        .route("/", get(root))
        .merge(configure_movie_routes())
        .merge(configure_director_routes())
        .merge(configure_genre_routes())
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Configura le routes per i film
///
/// `/movies/{selector}` copre `page=<n>`, `director_id=<id>`, `genre_id=<id>` e `<id>`.
fn configure_movie_routes() -> Router<Arc<AppState>> {
    use services::*;

    Router::new()
        .route("/movies", get(list_movies).post(create_movie))
        .route("/movies/", get(list_movies).post(create_movie))
        .route(
            "/movies/{selector}",
            get(get_movies_by_selector)
                .put(update_movie)
                .delete(delete_movie),
        )
}

/// Configura le routes per i registi
fn configure_director_routes() -> Router<Arc<AppState>> {
    use services::*;

    Router::new()
        .route("/directors", get(list_directors).post(create_director))
        .route("/directors/", get(list_directors).post(create_director))
        .route("/directors/{director_id}", get(get_director_by_id))
}

/// Configura le routes per i generi
fn configure_genre_routes() -> Router<Arc<AppState>> {
    use services::*;

    Router::new()
        .route("/genres", get(list_genres).post(create_genre))
        .route("/genres/", get(list_genres).post(create_genre))
        .route("/genres/{genre_id}", get(list_genre_movie_titles))
}
