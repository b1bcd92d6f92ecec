use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the pool is reference-counted and the config sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, handed to every repository call.
    pub pool: spacing_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
