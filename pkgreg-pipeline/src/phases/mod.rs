//! Built-in pipeline phases.
//!
//! This module provides the standard phases that run in every pipeline:
//!
//! - [`LoadSizesPhase`] - reads the package size table
//! - [`ScanPhase`] - discovers handlers and reads their package lists
//! - [`SortPhase`] - sorts each handler's packages by descending size

mod load_sizes;
mod scan;
mod sort;

pub use load_sizes::LoadSizesPhase;
pub use scan::ScanPhase;
pub use sort::SortPhase;

use pkgreg_input::Parsed;

use crate::{BuildContext, Diagnostic};

/// Convert an input error into a pipeline error.
pub(crate) fn fatal(err: Box<pkgreg_input::Error>) -> eyre::Report {
    eyre::Report::new(*err)
}

/// Record the soft issues of a parsed file.
///
/// In strict mode the first issue becomes an error instead.
pub(crate) fn record_issues<T>(
    ctx: &mut BuildContext,
    phase: &str,
    parsed: &Parsed<T>,
) -> eyre::Result<()> {
    if ctx.inputs.strict
        && let Some(err) = parsed.first_error()
    {
        return Err(fatal(err));
    }

    for issue in &parsed.issues {
        tracing::debug!(location = %parsed.location(issue), "{}", issue.kind.message());
        ctx.add_diagnostic(
            Diagnostic::warning(phase, issue.kind.message()).at(parsed.location(issue)),
        );
    }
    Ok(())
}
