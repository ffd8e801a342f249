//! Request handlers for the catalog entities.
//!
//! Each submodule provides async handler functions (create, list, get_by_id,
//! update, delete) for a single entity type. Handlers validate input,
//! delegate to the corresponding repository in `tunapiano_db`, and map
//! errors via [`AppError`](crate::error::AppError).

pub mod artist;
pub mod genre;
pub mod song;

use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tunapiano_core::types::DbId;

/// `201 Created` with a `Location` header pointing at the new resource.
pub(crate) fn created<T: Serialize>(collection: &str, id: DbId, body: T) -> Response {
    let location = format!("/{collection}/{id}");
    (StatusCode::CREATED, [(LOCATION, location)], Json(body)).into_response()
}
