//! Movie services - Gestione film

use crate::core::{AppError, AppJson, AppPath, AppState};
use crate::dtos::{CreateMovieDTO, MovieDTO, MovieSelector, UpdateMovieDTO};
use crate::entities::Movie;
use crate::repositories::{Create, Delete, Read, Update};
use axum::{
    extract::{Json, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

/// Numero di film per pagina
pub const PAGE_SIZE: i64 = 5;

/// GET /movies/ - prima pagina, identica a /movies/page=1
#[instrument(skip(state))]
pub async fn list_movies(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<MovieDTO>>, AppError> {
    debug!("Listing first page of movies");
    Ok(Json(load_page(&state, 1).await?))
}

/// GET /movies/{selector} - pagina, filtro per regista/genere o singolo film
#[instrument(skip(state))]
pub async fn get_movies_by_selector(
    State(state): State<Arc<AppState>>,
    AppPath(selector): AppPath<MovieSelector>, // page=<n> | director_id=<id> | genre_id=<id> | <id>
) -> Result<Response, AppError> {
    match selector {
        MovieSelector::Page(page) => {
            debug!("Listing movies page {}", page);
            Ok(Json(load_page(&state, page).await?).into_response())
        }
        MovieSelector::Director(director_id) => {
            let movies = state.movie.find_many_by_director_id(&director_id).await?;
            info!("Found {} movies for director {}", movies.len(), director_id);
            Ok(Json(to_dtos(movies)).into_response())
        }
        MovieSelector::Genre(genre_id) => {
            let movies = state.movie.find_many_by_genre_id(&genre_id).await?;
            info!("Found {} movies for genre {}", movies.len(), genre_id);
            Ok(Json(to_dtos(movies)).into_response())
        }
        MovieSelector::Id(movie_id) => {
            let movie = state.movie.read(&movie_id).await?.ok_or_else(|| {
                warn!("Movie {} not found", movie_id);
                AppError::not_found("not found")
                    .with_details(format!("Movie {} does not exist", movie_id))
            })?;
            Ok(Json(MovieDTO::from(movie)).into_response())
        }
    }
}

#[instrument(skip(state, body), fields(title = ?body.title))]
pub async fn create_movie(
    State(state): State<Arc<AppState>>,
    AppJson(body): AppJson<CreateMovieDTO>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Creating movie");
    body.validate()?;

    let movie = state.movie.create(&body).await?;

    info!("Movie {} created", movie.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/movies/{}", movie.id))],
    ))
}

/// PUT /movies/{id} - sostituzione completa, i campi assenti diventano null
#[instrument(skip(state, body))]
pub async fn update_movie(
    State(state): State<Arc<AppState>>,
    AppPath(movie_id): AppPath<i64>,
    AppJson(body): AppJson<UpdateMovieDTO>,
) -> Result<StatusCode, AppError> {
    debug!("Replacing movie");
    body.validate()?;

    state.movie.update(&movie_id, &body).await.map_err(|err| {
        if matches!(err, sqlx::Error::RowNotFound) {
            warn!("Movie {} not found for update", movie_id);
        }
        AppError::from(err)
    })?;

    info!("Movie {} updated", movie_id);
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(state))]
pub async fn delete_movie(
    State(state): State<Arc<AppState>>,
    AppPath(movie_id): AppPath<i64>,
) -> Result<StatusCode, AppError> {
    debug!("Deleting movie");
    state.movie.delete(&movie_id).await.map_err(|err| {
        if matches!(err, sqlx::Error::RowNotFound) {
            warn!("Movie {} not found for delete", movie_id);
        }
        AppError::from(err)
    })?;

    info!("Movie {} deleted", movie_id);
    Ok(StatusCode::NO_CONTENT)
}

async fn load_page(state: &AppState, page: i64) -> Result<Vec<MovieDTO>, AppError> {
    let offset = (page - 1).saturating_mul(PAGE_SIZE);
    let movies = state.movie.list_page(PAGE_SIZE, offset).await?;
    Ok(to_dtos(movies))
}

fn to_dtos(movies: Vec<Movie>) -> Vec<MovieDTO> {
    movies.into_iter().map(MovieDTO::from).collect()
}
