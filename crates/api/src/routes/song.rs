//! Route definitions for the `/songs` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::song;
use crate::state::AppState;

/// Routes mounted at `/songs`.
///
/// The static `/genre` segment takes priority over `/{id}`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// PATCH  /genre   -> attach_genre
/// GET    /{id}    -> get_by_id
/// PATCH  /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(song::list).post(song::create))
        .route("/genre", patch(song::attach_genre))
        .route(
            "/{id}",
            get(song::get_by_id)
                .patch(song::update)
                .delete(song::delete),
        )
}
