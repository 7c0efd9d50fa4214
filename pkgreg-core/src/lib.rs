//! Core types for pkgreg.
//!
//! This crate holds the data model shared by the input parsers, the build
//! pipeline and the binary: the package size table, handlers and the
//! registry, plus atomic output-file writing.

mod file;
mod registry;
mod sizes;

// File operations
pub use file::{DEFAULT_MODE, File, WriteResult};
// Data model
pub use registry::{Handler, Registry};
pub use sizes::{Size, SizeTable};
