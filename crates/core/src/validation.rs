//! Ad hoc spacing value checks.
//!
//! A spacing value is either the literal token `auto` or a plain decimal
//! number: optional leading `-`, digits, at most one `.`. Anything else
//! (units typed into the value, exponents, `NaN`) is rejected.

use crate::error::CoreError;
use crate::spacing::AUTO;

/// Validate a single spacing value, naming the field in the error.
pub fn validate_spacing_value(value: &str, name: &str) -> Result<(), CoreError> {
    if value == AUTO || is_numeric(value) {
        return Ok(());
    }
    Err(CoreError::Validation(format!(
        "{name} must be \"{AUTO}\" or a number, got \"{value}\""
    )))
}

fn is_numeric(value: &str) -> bool {
    let digits = value.strip_prefix('-').unwrap_or(value);
    let mut seen_digit = false;
    let mut seen_dot = false;
    for c in digits.chars() {
        match c {
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => return false,
        }
    }
    seen_digit
}
