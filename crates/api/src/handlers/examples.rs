//! Diagnostic handler returning the raw `example_table` rows.

use axum::extract::State;
use axum::Json;
use spacing_db::repositories::ExampleRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /examples
pub async fn list_examples(State(state): State<AppState>) -> AppResult<Json<Vec<serde_json::Value>>> {
    let rows = ExampleRepo::list_rows(&state.pool).await?;
    Ok(Json(rows))
}
