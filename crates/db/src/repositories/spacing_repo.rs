//! Repository for the `spacing_table` table.
//!
//! Column names are never built from request data: every statement is
//! assembled once from the static [`SpacingField`] column table.

use std::sync::LazyLock;

use spacing_core::spacing::{SpacingField, SpacingPatch, SpacingProperty, SpacingRecord};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::spacing::SpacingRow;

/// `id, user_id, project_id, component_id, <16 spacing columns>, created_at, updated_at`
static COLUMNS: LazyLock<String> = LazyLock::new(|| {
    let mut columns = vec!["id", "user_id", "project_id", "component_id"];
    for field in SpacingField::ALL {
        columns.push(field.value_column());
        columns.push(field.unit_column());
    }
    columns.extend(["created_at", "updated_at"]);
    columns.join(", ")
});

/// `UPDATE ... SET <col> = COALESCE($n, <col>), ... WHERE component_id = $1`
///
/// Binds are `$1` = component id, then value/unit for each field in
/// `SpacingField::ALL` order. A `NULL` bind leaves the column untouched.
static PATCH_QUERY: LazyLock<String> = LazyLock::new(|| {
    let assignments: Vec<String> = SpacingField::ALL
        .into_iter()
        .flat_map(|field| [field.value_column(), field.unit_column()])
        .enumerate()
        .map(|(index, column)| format!("{column} = COALESCE(${}, {column})", index + 2))
        .collect();
    format!(
        "UPDATE spacing_table SET {} WHERE component_id = $1",
        assignments.join(", ")
    )
});

/// `INSERT INTO spacing_table (user_id, project_id, component_id, <16 columns>) VALUES (...)`
static INSERT_QUERY: LazyLock<String> = LazyLock::new(|| {
    let mut columns = vec!["user_id", "project_id", "component_id"];
    for field in SpacingField::ALL {
        columns.push(field.value_column());
        columns.push(field.unit_column());
    }
    let placeholders: Vec<String> = (1..=columns.len()).map(|n| format!("${n}")).collect();
    format!(
        "INSERT INTO spacing_table ({}) VALUES ({}) RETURNING component_id",
        columns.join(", "),
        placeholders.join(", ")
    )
});

/// Provides the three spacing data access operations.
pub struct SpacingRepo;

impl SpacingRepo {
    /// Fetch the raw row for a component.
    pub async fn find_row(
        pool: &PgPool,
        component_id: &str,
    ) -> Result<Option<SpacingRow>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM spacing_table WHERE component_id = $1",
            COLUMNS.as_str()
        );
        sqlx::query_as::<_, SpacingRow>(&query)
            .bind(component_id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch a component's spacing record in the structured `{value, unit}` shape.
    ///
    /// Returns `None` when no row has this `component_id`. A stored unit
    /// outside the known set surfaces as [`sqlx::Error::Decode`].
    pub async fn get_spacing(
        pool: &PgPool,
        component_id: &str,
    ) -> Result<Option<SpacingRecord>, sqlx::Error> {
        let Some(row) = Self::find_row(pool, component_id).await? else {
            return Ok(None);
        };
        SpacingRecord::try_from(row)
            .map(Some)
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))
    }

    /// Update only the sides present in `patch`.
    ///
    /// Returns `true` if a row with this `component_id` exists.
    pub async fn patch_spacing(
        pool: &PgPool,
        component_id: &str,
        patch: &SpacingPatch,
    ) -> Result<bool, sqlx::Error> {
        let mut query = sqlx::query(PATCH_QUERY.as_str()).bind(component_id);
        for field in SpacingField::ALL {
            let property = patch.get(field);
            query = query
                .bind(property.map(|p| p.value.as_str()))
                .bind(property.map(|p| p.unit.as_str()));
        }
        let result = query.execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }

    /// Insert a record with fresh random identifiers and every side at its
    /// default, returning the new `component_id`.
    pub async fn post_spacing(pool: &PgPool) -> Result<String, sqlx::Error> {
        let user_id = Uuid::new_v4().to_string();
        let project_id = Uuid::new_v4().to_string();
        let component_id = Uuid::new_v4().to_string();
        let default = SpacingProperty::default();

        let mut query = sqlx::query_scalar::<_, String>(INSERT_QUERY.as_str())
            .bind(user_id)
            .bind(project_id)
            .bind(component_id);
        for _ in SpacingField::ALL {
            query = query
                .bind(default.value.clone())
                .bind(default.unit.as_str());
        }
        query.fetch_one(pool).await
    }
}
