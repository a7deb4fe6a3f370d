//! Core module for the curriculum data model and progress tracking

pub mod clipboard;
pub mod engine;
pub mod models;
pub mod store;
pub mod summary;
pub mod syllabus;

/// Returns the current version of the `journey-tracker` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
