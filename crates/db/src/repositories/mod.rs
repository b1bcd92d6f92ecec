//! Repository layer: one zero-sized struct per table, async associated
//! functions taking `&PgPool`.

pub mod example_repo;
pub mod spacing_repo;

pub use example_repo::ExampleRepo;
pub use spacing_repo::SpacingRepo;
