//! Plain-text rendering of a spacing record: margins outside, paddings inside.

use spacing_core::spacing::{SpacingField, SpacingRecord};

use crate::input::{SpacingInput, UnitSelect};

const INNER: usize = 46;
const SIDE: usize = 10;
const PADDING: usize = INNER - 2 * SIDE - 2;
const HALF: usize = PADDING / 2;

/// What one input shows: the bare value, plus its unit when the unit
/// selector would be visible.
pub fn cell(input: &SpacingInput) -> String {
    if input.shows_unit_select() {
        format!("{} {}", input.value(), input.unit())
    } else {
        input.value().to_string()
    }
}

pub fn render_record(record: &SpacingRecord) -> String {
    let c = |field: SpacingField| cell(&SpacingInput::new(field, record.property(field)));
    let blank = "";

    let lines = [
        format!("component {}", record.component_id),
        format!("+{:-^INNER$}+", " margin "),
        format!("|{:^INNER$}|", c(SpacingField::MarginTop)),
        format!("|{blank:SIDE$}+{:-^PADDING$}+{blank:SIDE$}|", " padding "),
        format!("|{blank:SIDE$}|{:^PADDING$}|{blank:SIDE$}|", c(SpacingField::PaddingTop)),
        format!(
            "|{:^SIDE$}|{:<HALF$}{:>HALF$}|{:^SIDE$}|",
            c(SpacingField::MarginLeft),
            c(SpacingField::PaddingLeft),
            c(SpacingField::PaddingRight),
            c(SpacingField::MarginRight),
        ),
        format!("|{blank:SIDE$}|{:^PADDING$}|{blank:SIDE$}|", c(SpacingField::PaddingBottom)),
        format!("|{blank:SIDE$}+{:-^PADDING$}+{blank:SIDE$}|", ""),
        format!("|{:^INNER$}|", c(SpacingField::MarginBottom)),
        format!("+{:-^INNER$}+", ""),
    ];
    lines.join("\n")
}

/// The unit selector's options on one line.
pub fn render_units() -> String {
    UnitSelect::options()
        .iter()
        .map(|unit| unit.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
