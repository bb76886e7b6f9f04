//! Film API handlers
//!
//! Contains HTTP request handlers for film CRUD operations. Handlers
//! decode the request, call into the catalog, persist the snapshot on
//! mutation, and encode the result.

use crate::error::AppError;
use crate::state::{AppState, Film, FilmId, FilmPatch, NewFilm};
use axum::{
    extract::{Path, State},
    response::Json,
};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Human-readable message
    pub message: String,
}

/// GET /api/films - List all films sorted by rank
pub async fn list_films(State(state): State<Arc<RwLock<AppState>>>) -> Json<Vec<Film>> {
    let state = state.read().await;
    Json(state.catalog.list())
}

/// GET /api/films/:id - Get a specific film
pub async fn get_film(
    State(state): State<Arc<RwLock<AppState>>>,
    Path(id): Path<FilmId>,
) -> Result<Json<Film>, AppError> {
    let state = state.read().await;
    let film = state.catalog.get(id)?;
    Ok(Json(film.clone()))
}

/// POST /api/films - Create a new film
pub async fn create_film(
    State(state): State<Arc<RwLock<AppState>>>,
    Json(request): Json<NewFilm>,
) -> Result<Json<Film>, AppError> {
    let mut state = state.write().await;
    let film = state.catalog.create(request)?;
    state.persist();
    Ok(Json(film))
}

/// PUT /api/films/:id - Update a film
pub async fn update_film(
    State(state): State<Arc<RwLock<AppState>>>,
    Path(id): Path<FilmId>,
    Json(request): Json<FilmPatch>,
) -> Result<Json<Film>, AppError> {
    let mut state = state.write().await;
    let film = state.catalog.update(id, request)?;
    state.persist();
    Ok(Json(film))
}

/// DELETE /api/films/:id - Delete a film
pub async fn delete_film(
    State(state): State<Arc<RwLock<AppState>>>,
    Path(id): Path<FilmId>,
) -> Result<Json<MessageResponse>, AppError> {
    let mut state = state.write().await;
    state.catalog.delete(id)?;
    state.persist();

    Ok(Json(MessageResponse {
        message: "Film deleted".to_string(),
    }))
}
