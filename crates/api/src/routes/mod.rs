pub mod spacing;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the route tree.
///
/// Routes are mounted at the root so existing clients keep their paths:
///
/// ```text
/// /health                        service + database health
/// /examples                      raw example_table rows (diagnostic)
///
/// /spacing                       create (POST)
/// /spacing/{component_id}        get, patch
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/examples", get(handlers::examples::list_examples))
        .nest("/spacing", spacing::router())
}
