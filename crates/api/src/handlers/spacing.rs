//! Handlers for the `/spacing` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use spacing_core::error::CoreError;
use spacing_core::spacing::{SpacingPatch, SpacingRecord};
use spacing_db::repositories::SpacingRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Body of a successful `PATCH`.
#[derive(Debug, Serialize, Deserialize)]
pub struct PatchSpacingResponse {
    pub message: String,
}

/// Body of a successful `POST`.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateSpacingResponse {
    pub component_id: String,
}

/// Reject a blank path parameter. The id itself is opaque and is used
/// exactly as given.
fn require_component_id(component_id: &str) -> AppResult<&str> {
    if component_id.trim().is_empty() {
        return Err(CoreError::MissingParameter("component_id").into());
    }
    Ok(component_id)
}

fn not_found(component_id: &str) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "spacing",
        key: component_id.to_string(),
    })
}

/// GET /spacing/{component_id}
pub async fn get_spacing(
    State(state): State<AppState>,
    Path(component_id): Path<String>,
) -> AppResult<Json<SpacingRecord>> {
    let component_id = require_component_id(&component_id)?;
    let record = SpacingRepo::get_spacing(&state.pool, component_id)
        .await?
        .ok_or_else(|| not_found(component_id))?;
    Ok(Json(record))
}

/// PATCH /spacing/{component_id}
///
/// Applies any subset of the eight sides. Keys outside the eight sides are
/// ignored; a body supplying none of them is rejected.
pub async fn patch_spacing(
    State(state): State<AppState>,
    Path(component_id): Path<String>,
    body: Result<Json<SpacingPatch>, JsonRejection>,
) -> AppResult<Json<PatchSpacingResponse>> {
    let component_id = require_component_id(&component_id)?;
    let Json(patch) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;

    if patch.is_empty() {
        return Err(CoreError::MissingParameter("spacing data").into());
    }
    patch.validate()?;

    let matched = SpacingRepo::patch_spacing(&state.pool, component_id, &patch).await?;
    if !matched {
        return Err(not_found(component_id));
    }

    tracing::info!(
        component_id,
        fields = patch.fields().count(),
        "Spacing record patched",
    );

    Ok(Json(PatchSpacingResponse {
        message: "success".to_string(),
    }))
}

/// POST /spacing
///
/// Creates a record with fresh identifiers and every side at `auto`/`px`.
pub async fn create_spacing(State(state): State<AppState>) -> AppResult<Json<CreateSpacingResponse>> {
    let component_id = SpacingRepo::post_spacing(&state.pool).await?;

    tracing::info!(component_id = %component_id, "Spacing record created");

    Ok(Json(CreateSpacingResponse { component_id }))
}
