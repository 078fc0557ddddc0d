//! Director services - Gestione registi

use crate::core::{AppError, AppJson, AppPath, AppState};
use crate::dtos::{CreateDirectorDTO, DirectorDTO};
use crate::repositories::{Create, List, Read};
use axum::{
    extract::{Json, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

#[instrument(skip(state))]
pub async fn list_directors(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<DirectorDTO>>, AppError> {
    debug!("Listing directors");
    let directors = state.director.list().await?;
    info!("Found {} directors", directors.len());
    Ok(Json(directors.into_iter().map(DirectorDTO::from).collect()))
}

#[instrument(skip(state, body), fields(name = ?body.name))]
pub async fn create_director(
    State(state): State<Arc<AppState>>,
    AppJson(body): AppJson<CreateDirectorDTO>,
) -> Result<impl IntoResponse, AppError> {
    body.validate()?;

    let director = state.director.create(&body).await?;

    info!("Director {} created", director.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/directors/{}", director.id))],
    ))
}

#[instrument(skip(state))]
pub async fn get_director_by_id(
    State(state): State<Arc<AppState>>,
    AppPath(director_id): AppPath<i64>, // parametro dalla URL /directors/{director_id}
) -> Result<Json<DirectorDTO>, AppError> {
    debug!("Fetching director by ID");
    let director = state.director.read(&director_id).await?.ok_or_else(|| {
        warn!("Director {} not found", director_id);
        AppError::not_found("not found")
            .with_details(format!("Director {} does not exist", director_id))
    })?;
    Ok(Json(DirectorDTO::from(director)))
}
