//! Per-side input state and the unit selector.

use spacing_core::error::CoreError;
use spacing_core::spacing::{SpacingField, SpacingProperty, SpacingUnit, AUTO};

/// An edit reported upward to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputChange {
    pub field: SpacingField,
    pub value: String,
    pub unit: SpacingUnit,
}

impl InputChange {
    pub fn new(field: SpacingField, value: impl Into<String>, unit: SpacingUnit) -> Self {
        Self {
            field,
            value: value.into(),
            unit,
        }
    }

    pub fn property(&self) -> SpacingProperty {
        SpacingProperty::new(self.value.clone(), self.unit)
    }
}

/// Local state of one side's input.
///
/// Seeded once from the property the form hands down; after that the input
/// owns its value and reports every change as an [`InputChange`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpacingInput {
    field: SpacingField,
    value: String,
    unit: SpacingUnit,
    focused: bool,
}

impl SpacingInput {
    /// A blank value falls back to `auto`.
    pub fn new(field: SpacingField, property: &SpacingProperty) -> Self {
        let value = if property.value.trim().is_empty() {
            AUTO.to_string()
        } else {
            property.value.clone()
        };
        Self {
            field,
            value,
            unit: property.unit,
            focused: false,
        }
    }

    pub fn field(&self) -> SpacingField {
        self.field
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn unit(&self) -> SpacingUnit {
        self.unit
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Still showing the untouched `auto` token.
    pub fn is_pristine(&self) -> bool {
        self.value == AUTO
    }

    /// The selector is hidden only for an unfocused `auto` value.
    pub fn shows_unit_select(&self) -> bool {
        !(self.is_pristine() && !self.focused)
    }

    pub fn set_value(&mut self, value: impl Into<String>) -> InputChange {
        self.value = value.into();
        self.change()
    }

    pub fn set_unit(&mut self, unit: SpacingUnit) -> InputChange {
        self.unit = unit;
        self.change()
    }

    fn change(&self) -> InputChange {
        InputChange::new(self.field, self.value.clone(), self.unit)
    }
}

/// The unit dropdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnitSelect {
    selected: SpacingUnit,
}

impl UnitSelect {
    pub fn new(selected: SpacingUnit) -> Self {
        Self { selected }
    }

    pub fn options() -> &'static [SpacingUnit] {
        &SpacingUnit::ALL
    }

    pub fn selected(&self) -> SpacingUnit {
        self.selected
    }

    /// Pick an option by its label, e.g. `rem` or `%`.
    pub fn choose(&mut self, label: &str) -> Result<SpacingUnit, CoreError> {
        self.selected = label.trim().parse()?;
        Ok(self.selected)
    }
}
