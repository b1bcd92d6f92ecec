//! Spacing row model.

use chrono::{DateTime, Utc};
use spacing_core::error::CoreError;
use spacing_core::spacing::{DbId, SpacingField, SpacingProperty, SpacingRecord, SpacingUnit};
use sqlx::FromRow;

/// A row from the `spacing_table` table, one value/unit column pair per side.
#[derive(Debug, Clone, FromRow)]
pub struct SpacingRow {
    pub id: DbId,
    pub user_id: String,
    pub project_id: String,
    pub component_id: String,
    pub margin_top_value: String,
    pub margin_top_unit: String,
    pub margin_right_value: String,
    pub margin_right_unit: String,
    pub margin_bottom_value: String,
    pub margin_bottom_unit: String,
    pub margin_left_value: String,
    pub margin_left_unit: String,
    pub padding_top_value: String,
    pub padding_top_unit: String,
    pub padding_right_value: String,
    pub padding_right_unit: String,
    pub padding_bottom_value: String,
    pub padding_bottom_unit: String,
    pub padding_left_value: String,
    pub padding_left_unit: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SpacingRow {
    /// The raw `(value, unit)` columns for one side.
    pub fn columns(&self, field: SpacingField) -> (&str, &str) {
        match field {
            SpacingField::MarginTop => (&self.margin_top_value, &self.margin_top_unit),
            SpacingField::MarginRight => (&self.margin_right_value, &self.margin_right_unit),
            SpacingField::MarginBottom => (&self.margin_bottom_value, &self.margin_bottom_unit),
            SpacingField::MarginLeft => (&self.margin_left_value, &self.margin_left_unit),
            SpacingField::PaddingTop => (&self.padding_top_value, &self.padding_top_unit),
            SpacingField::PaddingRight => (&self.padding_right_value, &self.padding_right_unit),
            SpacingField::PaddingBottom => (&self.padding_bottom_value, &self.padding_bottom_unit),
            SpacingField::PaddingLeft => (&self.padding_left_value, &self.padding_left_unit),
        }
    }
}

impl TryFrom<SpacingRow> for SpacingRecord {
    type Error = CoreError;

    fn try_from(row: SpacingRow) -> Result<Self, Self::Error> {
        let mut record =
            SpacingRecord::with_defaults(row.id, &row.user_id, &row.project_id, &row.component_id);

        for field in SpacingField::ALL {
            let (value, unit) = row.columns(field);
            let unit: SpacingUnit = unit.parse().map_err(|_| {
                CoreError::Internal(format!(
                    "stored unit \"{unit}\" in {} is not a spacing unit",
                    field.unit_column()
                ))
            })?;
            *record.property_mut(field) = SpacingProperty::new(value, unit);
        }

        Ok(record)
    }
}
