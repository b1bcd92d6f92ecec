//! Route definitions for the `/spacing` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::spacing;
use crate::state::AppState;

/// Spacing routes mounted at `/spacing`.
///
/// ```text
/// POST  /                 -> create_spacing
/// GET   /{component_id}   -> get_spacing
/// PATCH /{component_id}   -> patch_spacing
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(spacing::create_spacing))
        .route(
            "/{component_id}",
            get(spacing::get_spacing).patch(spacing::patch_spacing),
        )
}
