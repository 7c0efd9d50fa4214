//! Pipeline orchestrator.

use eyre::Result;

use crate::{
    BuildContext, BuildInputs, Phase,
    phases::{LoadSizesPhase, ScanPhase, SortPhase},
};

/// The build pipeline orchestrator.
///
/// Runs the built-in phases (load sizes, scan, sort) in order, stopping at
/// the first fatal error.
///
/// # Example
///
/// ```ignore
/// let ctx = Pipeline::new().run(inputs)?;
/// ```
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
}

impl Pipeline {
    /// Create a new pipeline with the built-in phases.
    pub fn new() -> Self {
        Self {
            phases: vec![
                Box::new(LoadSizesPhase),
                Box::new(ScanPhase),
                Box::new(SortPhase),
            ],
        }
    }

    /// Run the pipeline.
    ///
    /// Executes all phases in order:
    /// 1. LoadSizesPhase - reads the size table
    /// 2. ScanPhase - reads every handler's package list
    /// 3. SortPhase - sorts packages by descending size
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails fatally.
    pub fn run(&self, inputs: BuildInputs) -> Result<BuildContext> {
        let mut ctx = BuildContext::new(inputs);

        for phase in &self.phases {
            self.run_phase(phase.as_ref(), &mut ctx)?;
        }

        Ok(ctx)
    }

    fn run_phase(&self, phase: &dyn Phase, ctx: &mut BuildContext) -> Result<()> {
        let _span = tracing::debug_span!("phase", name = phase.name()).entered();
        tracing::debug!("{}", phase.description());

        let before = ctx.diagnostics.len();
        phase.run(ctx)?;

        tracing::debug!(
            diagnostics = ctx.diagnostics.len() - before,
            "phase finished"
        );
        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
