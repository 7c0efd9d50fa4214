//! Build operation - registry generation from handler folders.

use std::path::Path;

use eyre::Result;
use pkgreg_core::File;
use pkgreg_pipeline::{BuildInputs, Pipeline};

use crate::reports::{BuildReport, BuildResult};

/// Options for the build operation.
pub struct BuildOptions<'a> {
    /// Registry file to write.
    pub output: &'a Path,
    /// Whether to print the JSON without writing it.
    pub dry_run: bool,
}

/// Execute the build operation.
///
/// Runs the pipeline and writes the registry JSON in a single atomic step.
/// Nothing is written if any phase fails.
pub fn build(inputs: BuildInputs, opts: BuildOptions) -> Result<BuildReport> {
    let ctx = Pipeline::new().run(inputs)?;

    let warnings: Vec<String> = ctx
        .warnings()
        .map(|d| match &d.location {
            Some(loc) => format!("{} ({})", d.message, loc),
            None => d.message.clone(),
        })
        .collect();

    let mut missing_sizes = 0;
    for info in ctx.infos() {
        missing_sizes += 1;
        tracing::info!(handler = info.location.as_deref().unwrap_or("-"), "{}", info.message);
    }

    let registry = ctx.into_registry();
    let json = registry.to_json()?;

    let result = if opts.dry_run {
        BuildResult::Preview { json }
    } else {
        let file = File::new(opts.output, json);
        let write = file.write()?;
        tracing::debug!(path = %opts.output.display(), ?write, "registry written");
        BuildResult::Written {
            path: opts.output.to_path_buf(),
            write,
        }
    };

    Ok(BuildReport {
        warnings,
        missing_sizes,
        registry,
        result,
    })
}
