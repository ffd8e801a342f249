//! Handlers for the `/genres` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use tunapiano_core::catalog::ENTITY_GENRE;
use tunapiano_core::error::CoreError;
use tunapiano_core::types::DbId;
use tunapiano_db::models::genre::{CreateGenre, Genre, GenreDetail, UpdateGenre};
use tunapiano_db::repositories::{GenreRepo, SongRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::handlers::created;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: ENTITY_GENRE,
        id,
    })
}

/// POST /genres
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateGenre>,
) -> AppResult<Response> {
    input.validate()?;
    let genre = GenreRepo::create(&state.pool, &input).await?;
    tracing::info!(genre_id = genre.id, "Genre created");
    Ok(created("genres", genre.id, genre))
}

/// GET /genres
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Genre>>> {
    let genres = GenreRepo::list(&state.pool).await?;
    Ok(Json(genres))
}

/// GET /genres/{id}
///
/// Returns the genre with a summary list of the songs linked to it.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<GenreDetail>> {
    let genre = GenreRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let songs = SongRepo::list_by_genre(&state.pool, id).await?;
    Ok(Json(GenreDetail::new(genre, songs)))
}

/// PATCH /genres/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateGenre>,
) -> AppResult<Json<Genre>> {
    input.validate()?;
    let genre = GenreRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(genre))
}

/// DELETE /genres/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if GenreRepo::delete(&state.pool, id).await? {
        tracing::info!(genre_id = id, "Genre deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
