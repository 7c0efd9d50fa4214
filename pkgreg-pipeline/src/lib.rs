//! Registry build pipeline for pkgreg.
//!
//! This crate provides a [`Pipeline`] that turns a handlers folder and a
//! size table into a sorted [`Registry`](pkgreg_core::Registry). The
//! pipeline provides:
//!
//! - Explicit phase boundaries (load sizes → scan handlers → sort)
//! - Unified diagnostics collection for soft input issues
//! - Strict mode, which turns soft issues into errors
//!
//! # Example
//!
//! ```ignore
//! use pkgreg_pipeline::{BuildInputs, Pipeline};
//!
//! let inputs = BuildInputs::new("handlers", "packages_and_size.txt");
//! let ctx = Pipeline::new().run(inputs)?;
//!
//! for diag in ctx.warnings() {
//!     eprintln!("{}", diag);
//! }
//!
//! let registry = ctx.into_registry();
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod runner;

pub use context::{BuildContext, BuildInputs};
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use runner::Pipeline;
