//! Cinema CRUD handlers: create, list, read, update, delete.

use crate::error::AppError;
use crate::extractors::{CinemaId, Payload};
use crate::model::CinemaCandidate;
use crate::response::{success_many, success_one, success_one_ok};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

/// POST /bioskop
pub async fn create(
    State(state): State<AppState>,
    Payload(body): Payload<CinemaCandidate>,
) -> Result<impl IntoResponse, AppError> {
    let cinema = state.cinemas.create(body).await?;
    Ok(success_one("cinema created", cinema))
}

/// GET /bioskop
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let cinemas = state.cinemas.list().await?;
    Ok(success_many("cinemas retrieved", "no cinemas yet", cinemas))
}

/// GET /bioskop/:id
pub async fn read(State(state): State<AppState>, CinemaId(id): CinemaId) -> Result<impl IntoResponse, AppError> {
    let cinema = state.cinemas.get(id).await?;
    Ok(success_one_ok("cinema retrieved", cinema))
}

/// PUT /bioskop/:id
pub async fn update(
    State(state): State<AppState>,
    CinemaId(id): CinemaId,
    Payload(body): Payload<CinemaCandidate>,
) -> Result<impl IntoResponse, AppError> {
    let cinema = state.cinemas.update(id, body).await?;
    Ok(success_one_ok("cinema updated", cinema))
}

/// DELETE /bioskop/:id
pub async fn delete(State(state): State<AppState>, CinemaId(id): CinemaId) -> Result<impl IntoResponse, AppError> {
    let snapshot = state.cinemas.delete(id).await?;
    Ok(success_one_ok("cinema deleted", snapshot))
}
