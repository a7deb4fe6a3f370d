//! Shared library for `journey-tracker`
//! Contains the curriculum data model, gating engine, progress store, and
//! summary formatter used by the CLI.

pub mod core;
pub mod shared;

pub use shared::*;
