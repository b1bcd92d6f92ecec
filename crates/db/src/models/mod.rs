//! Row structs for the spacing tables.
//!
//! Rows mirror the physical columns; conversion into the structured
//! [`spacing_core::spacing::SpacingRecord`] happens here so handlers never
//! see flat column names.

pub mod spacing;
