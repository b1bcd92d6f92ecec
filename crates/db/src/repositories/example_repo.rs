//! Repository for the diagnostic `example_table` table.

use sqlx::PgPool;

/// Raw access to `example_table`, used by `GET /examples`.
pub struct ExampleRepo;

impl ExampleRepo {
    /// Every row of `example_table` as a JSON object keyed by column name.
    pub async fn list_rows(pool: &PgPool) -> Result<Vec<serde_json::Value>, sqlx::Error> {
        sqlx::query_scalar::<_, serde_json::Value>(
            "SELECT to_jsonb(t) FROM example_table t ORDER BY t.id",
        )
        .fetch_all(pool)
        .await
    }
}
