//! Build context passed through pipeline phases.

use std::path::PathBuf;

use eyre::{Result, eyre};
use pkgreg_core::{Handler, Registry, SizeTable};

use crate::diagnostic::{Diagnostic, Severity};

/// Paths and switches the pipeline is run with.
#[derive(Debug, Clone)]
pub struct BuildInputs {
    /// Folder containing one directory per handler.
    pub handlers_dir: PathBuf,
    /// The `<package>:<size>` table.
    pub sizes_file: PathBuf,
    /// Treat malformed input lines and stray entries as errors.
    pub strict: bool,
}

impl BuildInputs {
    pub fn new(handlers_dir: impl Into<PathBuf>, sizes_file: impl Into<PathBuf>) -> Self {
        Self {
            handlers_dir: handlers_dir.into(),
            sizes_file: sizes_file.into(),
            strict: false,
        }
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// Context passed through all pipeline phases.
///
/// Carries the build state through each phase, accumulating results and
/// diagnostics along the way.
#[derive(Debug)]
pub struct BuildContext {
    /// What the pipeline was asked to build.
    pub inputs: BuildInputs,
    /// The size table (populated by LoadSizesPhase).
    pub sizes: Option<SizeTable>,
    /// Handlers in registry order (populated by ScanPhase).
    pub handlers: Vec<Handler>,
    /// Diagnostics collected during the build.
    pub diagnostics: Vec<Diagnostic>,
}

impl BuildContext {
    /// Create a new build context.
    pub fn new(inputs: BuildInputs) -> Self {
        Self {
            inputs,
            sizes: None,
            handlers: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Check if any warning diagnostics have been recorded.
    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    /// Count the number of warning diagnostics.
    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    /// Add a warning diagnostic.
    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(phase, message));
    }

    /// Add an info diagnostic.
    pub fn add_info(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::info(phase, message));
    }

    /// Add a diagnostic with a location.
    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Get all warning diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }

    /// Get all info diagnostics.
    pub fn infos(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Info))
    }

    /// The size table, once LoadSizesPhase has run.
    pub fn sizes(&self) -> Result<&SizeTable> {
        self.sizes
            .as_ref()
            .ok_or_else(|| eyre!("size table not loaded - did LoadSizesPhase run?"))
    }

    /// Consume the context into the finished registry.
    pub fn into_registry(self) -> Registry {
        self.handlers.into_iter().collect()
    }
}
