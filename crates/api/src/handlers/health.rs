//! Liveness endpoint reporting service version and database reachability.

use std::time::Instant;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `ok` when the database answered, `degraded` otherwise.
    pub status: String,
    pub version: String,
    pub db_healthy: bool,
    /// Round-trip time of the database check.
    pub db_latency_ms: u64,
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let started = Instant::now();
    let db_healthy = match spacing_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Database health check failed");
            false
        }
    };
    let db_latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        db_healthy,
        db_latency_ms,
    })
}
