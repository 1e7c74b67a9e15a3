use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use shelf_db::kind::RecordKind;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Which bookmark schema is being served.
    pub variant: &'static str,
    /// Whether the database is reachable.
    pub db_healthy: bool,
}

/// GET /health -- returns service and database health.
async fn health_check<K: RecordKind>(State(state): State<AppState<K>>) -> Json<HealthResponse> {
    let db_healthy = shelf_db::health_check(state.store.pool()).await.is_ok();

    let status = if db_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        variant: K::VARIANT.as_str(),
        db_healthy,
    })
}

pub fn router<K: RecordKind>() -> Router<AppState<K>> {
    Router::new().route("/health", get(health_check::<K>))
}
