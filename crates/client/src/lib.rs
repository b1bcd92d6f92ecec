//! Spacing editor client.
//!
//! A REST client for the spacing API plus the form state machine that
//! drives the editor: loading, no-project, ready, debounced saves and a
//! dirty-state navigation guard.

pub mod api;
pub mod config;
pub mod debounce;
pub mod form;
pub mod guard;
pub mod input;
pub mod render;
pub mod storage;
