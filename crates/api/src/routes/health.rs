use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Liveness report for the catalog service.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` when the catalog store answers, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub database: DatabaseHealth,
}

/// Connection pool and schema state of the catalog store.
#[derive(Serialize)]
pub struct DatabaseHealth {
    pub reachable: bool,
    /// Newest applied migration; `None` when the store is unreachable.
    pub schema_version: Option<i64>,
    pub open_connections: u32,
    pub idle_connections: usize,
    pub max_connections: u32,
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let schema_version = tunapiano_db::schema_version(&state.pool)
        .await
        .inspect_err(|err| tracing::warn!(error = %err, "Catalog store health check failed"));
    let reachable = schema_version.is_ok();

    Json(HealthResponse {
        status: if reachable { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        database: DatabaseHealth {
            reachable,
            schema_version: schema_version.ok().flatten(),
            open_connections: state.pool.size(),
            idle_connections: state.pool.num_idle(),
            max_connections: state.config.database_max_connections,
        },
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
