//! Spacing record schema.
//!
//! A record carries four identifiers and eight spacing sides. Each side is a
//! `{value, unit}` pair, stored as two physical columns whose names come
//! from the static table on [`SpacingField`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::validation::validate_spacing_value;

/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// The value token meaning "let layout decide".
pub const AUTO: &str = "auto";

// ---------------------------------------------------------------------------
// Units
// ---------------------------------------------------------------------------

/// CSS length units accepted for a spacing side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpacingUnit {
    #[default]
    Px,
    Pt,
    In,
    Cm,
    Mm,
    #[serde(rename = "%")]
    Percent,
    Em,
    Rem,
    Vw,
    Vh,
    Vmin,
    Vmax,
    Ch,
    Ex,
}

impl SpacingUnit {
    /// Every unit, in the order the unit selector lists them.
    pub const ALL: [SpacingUnit; 14] = [
        SpacingUnit::Px,
        SpacingUnit::Pt,
        SpacingUnit::In,
        SpacingUnit::Cm,
        SpacingUnit::Mm,
        SpacingUnit::Percent,
        SpacingUnit::Em,
        SpacingUnit::Rem,
        SpacingUnit::Vw,
        SpacingUnit::Vh,
        SpacingUnit::Vmin,
        SpacingUnit::Vmax,
        SpacingUnit::Ch,
        SpacingUnit::Ex,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SpacingUnit::Px => "px",
            SpacingUnit::Pt => "pt",
            SpacingUnit::In => "in",
            SpacingUnit::Cm => "cm",
            SpacingUnit::Mm => "mm",
            SpacingUnit::Percent => "%",
            SpacingUnit::Em => "em",
            SpacingUnit::Rem => "rem",
            SpacingUnit::Vw => "vw",
            SpacingUnit::Vh => "vh",
            SpacingUnit::Vmin => "vmin",
            SpacingUnit::Vmax => "vmax",
            SpacingUnit::Ch => "ch",
            SpacingUnit::Ex => "ex",
        }
    }
}

impl fmt::Display for SpacingUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpacingUnit {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SpacingUnit::ALL
            .into_iter()
            .find(|unit| unit.as_str() == s)
            .ok_or_else(|| CoreError::Validation(format!("unknown spacing unit \"{s}\"")))
    }
}

// ---------------------------------------------------------------------------
// Property
// ---------------------------------------------------------------------------

/// One spacing side: a value token plus its unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpacingProperty {
    pub value: String,
    pub unit: SpacingUnit,
}

impl SpacingProperty {
    pub fn new(value: impl Into<String>, unit: SpacingUnit) -> Self {
        Self {
            value: value.into(),
            unit,
        }
    }

    pub fn is_auto(&self) -> bool {
        self.value == AUTO
    }
}

impl Default for SpacingProperty {
    fn default() -> Self {
        Self::new(AUTO, SpacingUnit::Px)
    }
}

impl fmt::Display for SpacingProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_auto() {
            f.write_str(AUTO)
        } else {
            write!(f, "{}{}", self.value, self.unit)
        }
    }
}

// ---------------------------------------------------------------------------
// Fields
// ---------------------------------------------------------------------------

/// The eight spacing sides of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpacingField {
    MarginTop,
    MarginRight,
    MarginBottom,
    MarginLeft,
    PaddingTop,
    PaddingRight,
    PaddingBottom,
    PaddingLeft,
}

/// `(field, key, value column, unit column)` for every side.
static FIELD_COLUMNS: [(SpacingField, &str, &str, &str); 8] = [
    (SpacingField::MarginTop, "margin_top", "margin_top_value", "margin_top_unit"),
    (SpacingField::MarginRight, "margin_right", "margin_right_value", "margin_right_unit"),
    (SpacingField::MarginBottom, "margin_bottom", "margin_bottom_value", "margin_bottom_unit"),
    (SpacingField::MarginLeft, "margin_left", "margin_left_value", "margin_left_unit"),
    (SpacingField::PaddingTop, "padding_top", "padding_top_value", "padding_top_unit"),
    (SpacingField::PaddingRight, "padding_right", "padding_right_value", "padding_right_unit"),
    (SpacingField::PaddingBottom, "padding_bottom", "padding_bottom_value", "padding_bottom_unit"),
    (SpacingField::PaddingLeft, "padding_left", "padding_left_value", "padding_left_unit"),
];

impl SpacingField {
    pub const ALL: [SpacingField; 8] = [
        SpacingField::MarginTop,
        SpacingField::MarginRight,
        SpacingField::MarginBottom,
        SpacingField::MarginLeft,
        SpacingField::PaddingTop,
        SpacingField::PaddingRight,
        SpacingField::PaddingBottom,
        SpacingField::PaddingLeft,
    ];

    fn columns(self) -> &'static (SpacingField, &'static str, &'static str, &'static str) {
        // FIELD_COLUMNS is declared in the same order as the enum.
        &FIELD_COLUMNS[self as usize]
    }

    /// JSON key, e.g. `margin_top`.
    pub fn key(self) -> &'static str {
        self.columns().1
    }

    /// Column holding the value token, e.g. `margin_top_value`.
    pub fn value_column(self) -> &'static str {
        self.columns().2
    }

    /// Column holding the unit, e.g. `margin_top_unit`.
    pub fn unit_column(self) -> &'static str {
        self.columns().3
    }

    pub fn is_margin(self) -> bool {
        (self as usize) < 4
    }
}

impl fmt::Display for SpacingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SpacingField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SpacingField::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| CoreError::Validation(format!("unknown spacing field \"{s}\"")))
    }
}

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

/// A component's full spacing record as served by `GET /spacing/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpacingRecord {
    pub id: DbId,
    pub user_id: String,
    pub project_id: String,
    pub component_id: String,
    pub margin_top: SpacingProperty,
    pub margin_right: SpacingProperty,
    pub margin_bottom: SpacingProperty,
    pub margin_left: SpacingProperty,
    pub padding_top: SpacingProperty,
    pub padding_right: SpacingProperty,
    pub padding_bottom: SpacingProperty,
    pub padding_left: SpacingProperty,
}

impl SpacingRecord {
    /// A record with every side at `auto`/`px`.
    pub fn with_defaults(
        id: DbId,
        user_id: impl Into<String>,
        project_id: impl Into<String>,
        component_id: impl Into<String>,
    ) -> Self {
        Self {
            id,
            user_id: user_id.into(),
            project_id: project_id.into(),
            component_id: component_id.into(),
            margin_top: SpacingProperty::default(),
            margin_right: SpacingProperty::default(),
            margin_bottom: SpacingProperty::default(),
            margin_left: SpacingProperty::default(),
            padding_top: SpacingProperty::default(),
            padding_right: SpacingProperty::default(),
            padding_bottom: SpacingProperty::default(),
            padding_left: SpacingProperty::default(),
        }
    }

    pub fn property(&self, field: SpacingField) -> &SpacingProperty {
        match field {
            SpacingField::MarginTop => &self.margin_top,
            SpacingField::MarginRight => &self.margin_right,
            SpacingField::MarginBottom => &self.margin_bottom,
            SpacingField::MarginLeft => &self.margin_left,
            SpacingField::PaddingTop => &self.padding_top,
            SpacingField::PaddingRight => &self.padding_right,
            SpacingField::PaddingBottom => &self.padding_bottom,
            SpacingField::PaddingLeft => &self.padding_left,
        }
    }

    pub fn property_mut(&mut self, field: SpacingField) -> &mut SpacingProperty {
        match field {
            SpacingField::MarginTop => &mut self.margin_top,
            SpacingField::MarginRight => &mut self.margin_right,
            SpacingField::MarginBottom => &mut self.margin_bottom,
            SpacingField::MarginLeft => &mut self.margin_left,
            SpacingField::PaddingTop => &mut self.padding_top,
            SpacingField::PaddingRight => &mut self.padding_right,
            SpacingField::PaddingBottom => &mut self.padding_bottom,
            SpacingField::PaddingLeft => &mut self.padding_left,
        }
    }

    /// Check every side's value token.
    pub fn validate(&self) -> Result<(), CoreError> {
        SpacingField::ALL
            .into_iter()
            .try_for_each(|field| validate_spacing_value(&self.property(field).value, field.key()))
    }
}

// ---------------------------------------------------------------------------
// Patch
// ---------------------------------------------------------------------------

/// Body of `PATCH /spacing/{id}`: any subset of the eight sides.
///
/// Keys other than the eight sides (`id`, `user_id`, ...) are ignored so a
/// client may send its whole record back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpacingPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<SpacingProperty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_right: Option<SpacingProperty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<SpacingProperty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_left: Option<SpacingProperty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_top: Option<SpacingProperty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_right: Option<SpacingProperty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<SpacingProperty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_left: Option<SpacingProperty>,
}

impl SpacingPatch {
    pub fn get(&self, field: SpacingField) -> Option<&SpacingProperty> {
        match field {
            SpacingField::MarginTop => self.margin_top.as_ref(),
            SpacingField::MarginRight => self.margin_right.as_ref(),
            SpacingField::MarginBottom => self.margin_bottom.as_ref(),
            SpacingField::MarginLeft => self.margin_left.as_ref(),
            SpacingField::PaddingTop => self.padding_top.as_ref(),
            SpacingField::PaddingRight => self.padding_right.as_ref(),
            SpacingField::PaddingBottom => self.padding_bottom.as_ref(),
            SpacingField::PaddingLeft => self.padding_left.as_ref(),
        }
    }

    /// Builder-style setter, mostly for tests and clients.
    pub fn with(mut self, field: SpacingField, property: SpacingProperty) -> Self {
        let slot = match field {
            SpacingField::MarginTop => &mut self.margin_top,
            SpacingField::MarginRight => &mut self.margin_right,
            SpacingField::MarginBottom => &mut self.margin_bottom,
            SpacingField::MarginLeft => &mut self.margin_left,
            SpacingField::PaddingTop => &mut self.padding_top,
            SpacingField::PaddingRight => &mut self.padding_right,
            SpacingField::PaddingBottom => &mut self.padding_bottom,
            SpacingField::PaddingLeft => &mut self.padding_left,
        };
        *slot = Some(property);
        self
    }

    /// Supplied sides, in field order.
    pub fn fields(&self) -> impl Iterator<Item = (SpacingField, &SpacingProperty)> + '_ {
        SpacingField::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|property| (field, property)))
    }

    pub fn is_empty(&self) -> bool {
        self.fields().next().is_none()
    }

    /// Check the value token of every supplied side.
    pub fn validate(&self) -> Result<(), CoreError> {
        self.fields()
            .try_for_each(|(field, property)| validate_spacing_value(&property.value, field.key()))
    }
}

impl From<&SpacingRecord> for SpacingPatch {
    fn from(record: &SpacingRecord) -> Self {
        SpacingField::ALL
            .into_iter()
            .fold(SpacingPatch::default(), |patch, field| {
                patch.with(field, record.property(field).clone())
            })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    #[test]
    fn unit_serializes_as_css_token() {
        assert_eq!(serde_json::to_value(SpacingUnit::Percent).unwrap(), json!("%"));
        assert_eq!(serde_json::to_value(SpacingUnit::Vmin).unwrap(), json!("vmin"));
        let unit: SpacingUnit = serde_json::from_value(json!("in")).unwrap();
        assert_eq!(unit, SpacingUnit::In);
    }

    #[test]
    fn unit_display_matches_serde_for_every_unit() {
        for unit in SpacingUnit::ALL {
            assert_eq!(serde_json::to_value(unit).unwrap(), json!(unit.to_string()));
            assert_eq!(unit.as_str().parse::<SpacingUnit>().unwrap(), unit);
        }
    }

    #[test]
    fn unknown_unit_is_rejected() {
        assert_matches!("furlong".parse::<SpacingUnit>(), Err(CoreError::Validation(_)));
        assert!(serde_json::from_value::<SpacingUnit>(json!("PX")).is_err());
    }

    #[test]
    fn field_columns_follow_naming_scheme() {
        for field in SpacingField::ALL {
            assert_eq!(field.value_column(), format!("{}_value", field.key()));
            assert_eq!(field.unit_column(), format!("{}_unit", field.key()));
            assert_eq!(field.key().parse::<SpacingField>().unwrap(), field);
            assert_eq!(serde_json::to_value(field).unwrap(), json!(field.key()));
        }
    }

    #[test]
    fn column_table_is_in_enum_order() {
        for (index, field) in SpacingField::ALL.into_iter().enumerate() {
            assert_eq!(FIELD_COLUMNS[index].0, field);
        }
    }

    #[test]
    fn margins_come_before_paddings() {
        let margins: Vec<_> = SpacingField::ALL.into_iter().filter(|f| f.is_margin()).collect();
        assert_eq!(margins.len(), 4);
        assert!(margins.iter().all(|f| f.key().starts_with("margin_")));
    }

    #[test]
    fn default_record_has_all_sides_auto_px() {
        let record = SpacingRecord::with_defaults(1, "u", "p", "c");
        for field in SpacingField::ALL {
            assert_eq!(record.property(field), &SpacingProperty::new("auto", SpacingUnit::Px));
        }
        assert!(record.validate().is_ok());
    }

    #[test]
    fn record_json_uses_nested_pairs() {
        let mut record = SpacingRecord::with_defaults(7, "u", "p", "c");
        *record.property_mut(SpacingField::PaddingLeft) = SpacingProperty::new("1.5", SpacingUnit::Rem);

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["component_id"], "c");
        assert_eq!(json["margin_top"], json!({"value": "auto", "unit": "px"}));
        assert_eq!(json["padding_left"], json!({"value": "1.5", "unit": "rem"}));
    }

    #[test]
    fn record_validation_reports_bad_side() {
        let mut record = SpacingRecord::with_defaults(1, "u", "p", "c");
        record.margin_bottom.value = "12px".into();
        let err = record.validate().unwrap_err();
        assert!(err.to_string().contains("margin_bottom"));
    }

    #[test]
    fn patch_ignores_unknown_keys() {
        let patch: SpacingPatch = serde_json::from_value(json!({
            "id": 3,
            "component_id": "abc",
            "margin_top": {"value": "12", "unit": "px"},
        }))
        .unwrap();

        let supplied: Vec<_> = patch.fields().collect();
        assert_eq!(supplied.len(), 1);
        assert_eq!(supplied[0].0, SpacingField::MarginTop);
        assert_eq!(supplied[0].1.value, "12");
    }

    #[test]
    fn empty_patch_is_empty() {
        let patch: SpacingPatch = serde_json::from_value(json!({"user_id": "x"})).unwrap();
        assert!(patch.is_empty());
        assert!(!SpacingPatch::default()
            .with(SpacingField::PaddingTop, SpacingProperty::default())
            .is_empty());
    }

    #[test]
    fn patch_rejects_malformed_side() {
        let result = serde_json::from_value::<SpacingPatch>(json!({
            "margin_top": {"value": "12", "unit": "parsec"},
        }));
        assert!(result.is_err());
    }

    #[test]
    fn patch_from_record_supplies_all_sides() {
        let record = SpacingRecord::with_defaults(1, "u", "p", "c");
        let patch = SpacingPatch::from(&record);
        assert_eq!(patch.fields().count(), 8);

        let json = serde_json::to_value(&patch).unwrap();
        assert!(json.get("component_id").is_none());
    }

    #[test]
    fn property_display() {
        assert_eq!(SpacingProperty::default().to_string(), "auto");
        assert_eq!(SpacingProperty::new("4", SpacingUnit::Percent).to_string(), "4%");
    }
}
