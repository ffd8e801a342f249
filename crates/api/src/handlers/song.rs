//! Handlers for the `/songs` resource, including genre linking.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use tunapiano_core::catalog::{ENTITY_GENRE, ENTITY_SONG};
use tunapiano_core::error::CoreError;
use tunapiano_core::types::DbId;
use tunapiano_db::models::genre_song::GenreSongLink;
use tunapiano_db::models::song::{CreateSong, Song, SongDetail, UpdateSong};
use tunapiano_db::repositories::{ArtistRepo, GenreRepo, GenreSongRepo, SongRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::handlers::created;
use crate::state::AppState;

fn not_found(entity: &'static str, id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity, id })
}

/// POST /songs
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateSong>,
) -> AppResult<Response> {
    input.validate()?;
    let song = SongRepo::create(&state.pool, &input).await?;
    tracing::info!(song_id = song.id, artist_id = song.artist_id, "Song created");
    Ok(created("songs", song.id, song))
}

/// GET /songs
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Song>>> {
    let songs = SongRepo::list(&state.pool).await?;
    Ok(Json(songs))
}

/// GET /songs/{id}
///
/// Returns the song with its artist and genres inlined.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<SongDetail>> {
    let song = SongRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(ENTITY_SONG, id))?;
    // The artist can only be missing if it was deleted after the song read,
    // in which case the cascade has removed the song as well.
    let artist = ArtistRepo::find_by_id(&state.pool, song.artist_id)
        .await?
        .ok_or_else(|| not_found(ENTITY_SONG, id))?;
    let genres = GenreSongRepo::genres_for_song(&state.pool, id).await?;
    Ok(Json(SongDetail::new(song, artist, genres)))
}

/// PATCH /songs/{id}
///
/// A supplied `genre_ids` replaces the song's genre set with the existing
/// genres among those ids.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSong>,
) -> AppResult<Json<Song>> {
    input.validate()?;
    let song = SongRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(ENTITY_SONG, id))?;
    Ok(Json(song))
}

/// DELETE /songs/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if SongRepo::delete(&state.pool, id).await? {
        tracing::info!(song_id = id, "Song deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(ENTITY_SONG, id))
    }
}

/// PATCH /songs/genre
///
/// Link one genre to one song. Linking an already-linked pair is a no-op
/// that still reports success.
pub async fn attach_genre(
    State(state): State<AppState>,
    Json(link): Json<GenreSongLink>,
) -> AppResult<(StatusCode, Json<GenreSongLink>)> {
    SongRepo::find_by_id(&state.pool, link.song_id)
        .await?
        .ok_or_else(|| not_found(ENTITY_SONG, link.song_id))?;
    GenreRepo::find_by_id(&state.pool, link.genre_id)
        .await?
        .ok_or_else(|| not_found(ENTITY_GENRE, link.genre_id))?;

    let inserted = GenreSongRepo::attach(&state.pool, link.genre_id, link.song_id).await?;
    tracing::info!(
        song_id = link.song_id,
        genre_id = link.genre_id,
        inserted,
        "Genre attached to song"
    );
    Ok((StatusCode::CREATED, Json(link)))
}
