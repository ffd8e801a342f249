use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// Each request checks a connection out of `pool` for the duration of its
/// queries; there is no other shared mutable state.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: tunapiano_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
