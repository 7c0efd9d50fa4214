//! Core operations.
//!
//! Business logic for the CLI, separated from argument parsing and output
//! rendering.

pub mod build;

pub use build::{BuildOptions, build};
