pub mod artist;
pub mod genre;
pub mod health;
pub mod song;

use axum::Router;

use crate::state::AppState;

/// Build the catalog route tree.
///
/// Route hierarchy:
///
/// ```text
/// /artists                 list, create
/// /artists/{id}            get, patch, delete
///
/// /songs                   list, create
/// /songs/genre             attach a genre to a song (PATCH)
/// /songs/{id}              get, patch, delete
///
/// /genres                  list, create
/// /genres/{id}             get, patch, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/artists", artist::router())
        .nest("/songs", song::router())
        .nest("/genres", genre::router())
}
