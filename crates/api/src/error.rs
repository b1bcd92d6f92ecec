use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use spacing_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Every variant renders the same way: logged at the route boundary, then
/// returned as `500 {"error": "<message>"}`. Clients of this API do not
/// distinguish "not found" from "internal".
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `spacing_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A request body that could not be read as JSON.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn status(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        match &self {
            AppError::Core(CoreError::Internal(_)) | AppError::Database(_) => {
                tracing::error!(error = %message, "Request failed");
            }
            _ => {
                tracing::warn!(error = %message, "Request rejected");
            }
        }

        (self.status(), axum::Json(json!({ "error": message }))).into_response()
    }
}
