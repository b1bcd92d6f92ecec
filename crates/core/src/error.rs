#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{0} is not found")]
    MissingParameter(&'static str),

    #[error("no matching {entity} record found for {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
