//! Report data structures for commands.
//!
//! Operations build reports, then render them to an Output target.

mod build;
mod output;

pub use build::{BuildReport, BuildResult};
pub use output::{QuietOutput, Report, TerminalOutput};
