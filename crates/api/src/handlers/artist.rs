//! Handlers for the `/artists` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use tunapiano_core::catalog::ENTITY_ARTIST;
use tunapiano_core::error::CoreError;
use tunapiano_core::types::DbId;
use tunapiano_db::models::artist::{Artist, ArtistDetail, CreateArtist, UpdateArtist};
use tunapiano_db::repositories::{ArtistRepo, SongRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::handlers::created;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: ENTITY_ARTIST,
        id,
    })
}

/// POST /artists
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateArtist>,
) -> AppResult<Response> {
    input.validate()?;
    let artist = ArtistRepo::create(&state.pool, &input).await?;
    tracing::info!(artist_id = artist.id, "Artist created");
    Ok(created("artists", artist.id, artist))
}

/// GET /artists
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Artist>>> {
    let artists = ArtistRepo::list(&state.pool).await?;
    Ok(Json(artists))
}

/// GET /artists/{id}
///
/// Returns the artist with a count and summary list of their songs.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ArtistDetail>> {
    let artist = ArtistRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let songs = SongRepo::list_by_artist(&state.pool, id).await?;
    Ok(Json(ArtistDetail::new(artist, songs)))
}

/// PATCH /artists/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateArtist>,
) -> AppResult<Json<Artist>> {
    input.validate()?;
    let artist = ArtistRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(artist))
}

/// DELETE /artists/{id}
///
/// Also removes the artist's songs.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if ArtistRepo::delete(&state.pool, id).await? {
        tracing::info!(artist_id = id, "Artist deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
