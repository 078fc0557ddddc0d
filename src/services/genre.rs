//! Genre services - Gestione generi

use crate::core::{AppError, AppJson, AppPath, AppState};
use crate::dtos::{CreateGenreDTO, GenreDTO, GenreTitleDTO};
use crate::repositories::{Create, List};
use axum::{
    extract::{Json, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::{debug, info, instrument};
use validator::Validate;

#[instrument(skip(state))]
pub async fn list_genres(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<GenreDTO>>, AppError> {
    debug!("Listing genres");
    let genres = state.genre.list().await?;
    info!("Found {} genres", genres.len());
    Ok(Json(genres.into_iter().map(GenreDTO::from).collect()))
}

#[instrument(skip(state, body), fields(name = ?body.name))]
pub async fn create_genre(
    State(state): State<Arc<AppState>>,
    AppJson(body): AppJson<CreateGenreDTO>,
) -> Result<impl IntoResponse, AppError> {
    body.validate()?;

    let genre = state.genre.create(&body).await?;

    info!("Genre {} created", genre.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/genres/{}", genre.id))],
    ))
}

/// GET /genres/{id} - coppie { genre, title } per ogni film del genere, array vuoto se nessuno
#[instrument(skip(state))]
pub async fn list_genre_movie_titles(
    State(state): State<Arc<AppState>>,
    AppPath(genre_id): AppPath<i64>,
) -> Result<Json<Vec<GenreTitleDTO>>, AppError> {
    debug!("Listing movie titles for genre");
    let titles = state.genre.find_movie_titles(&genre_id).await?;
    info!("Found {} titles for genre {}", titles.len(), genre_id);
    Ok(Json(titles.into_iter().map(GenreTitleDTO::from).collect()))
}
