//! Load phase - reads the package size table.

use eyre::Result;
use pkgreg_input::read_sizes;

use super::{fatal, record_issues};
use crate::{BuildContext, Phase};

/// Phase that reads the size table into the context.
///
/// Runs before any handler is scanned so every lookup sees the full table.
pub struct LoadSizesPhase;

impl Phase for LoadSizesPhase {
    fn name(&self) -> &'static str {
        "load-sizes"
    }

    fn description(&self) -> &'static str {
        "Read the package size table"
    }

    fn run(&self, ctx: &mut BuildContext) -> Result<()> {
        let parsed = read_sizes(&ctx.inputs.sizes_file).map_err(fatal)?;
        record_issues(ctx, self.name(), &parsed)?;

        tracing::debug!(packages = parsed.value.len(), "size table loaded");
        ctx.sizes = Some(parsed.value);
        Ok(())
    }
}
