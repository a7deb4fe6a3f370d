//! Shared module for functionality common to the library and the CLI

pub mod config;

/// Returns the current version of the `journey-tracker` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
