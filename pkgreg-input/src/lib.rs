//! Input parsing for pkgreg.
//!
//! Reads the two line-based input formats (the package size table and each
//! handler's `packages.txt`) and discovers handler directories. Hard
//! failures are typed [`Error`]s; malformed lines become [`LineIssue`]s.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod handlers;
mod issue;
mod packages;
mod sizes;

use std::path::Path;

pub use error::{Error, Result, SourceContext};
pub use handlers::{Discovery, HandlerDir, discover_handlers};
pub use issue::{IssueKind, LineIssue, Parsed};
pub use packages::{PACKAGES_FILE, parse_packages, read_packages};
pub use sizes::{parse_sizes, read_sizes};

/// Read a file as text, replacing invalid UTF-8 instead of failing.
fn read_lossy(path: &Path) -> std::io::Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    })
}
