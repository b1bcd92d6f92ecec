pub mod examples;
pub mod health;
pub mod spacing;
