//! Domain types shared by the spacing API server and its clients.
//!
//! Everything here is storage- and transport-agnostic: the record shape,
//! the closed set of CSS units, the eight spacing sides and their column
//! mapping, and the ad hoc value checks applied before anything is written.

pub mod error;
pub mod spacing;
pub mod validation;
