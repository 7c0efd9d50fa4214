//! Pipeline phase trait.

use eyre::Result;

use crate::BuildContext;

/// A phase in the build pipeline.
///
/// Phases are executed in order by the pipeline. Each phase reads and
/// updates the build context.
///
/// Built-in phases:
/// - `LoadSizesPhase` - reads the size table
/// - `ScanPhase` - discovers handlers and reads their package lists
/// - `SortPhase` - orders each handler's packages by size
pub trait Phase {
    /// The name of this phase (used in diagnostics and logs).
    fn name(&self) -> &'static str;

    /// A human-readable description of what this phase does.
    fn description(&self) -> &'static str;

    /// Run this phase on the build context.
    ///
    /// # Errors
    ///
    /// Returns an error if the phase fails fatally. Non-fatal issues should
    /// be recorded as diagnostics instead.
    fn run(&self, ctx: &mut BuildContext) -> Result<()>;
}
