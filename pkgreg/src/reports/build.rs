//! Build report data structures.

use std::path::PathBuf;

use pkgreg_core::{Registry, WriteResult};

use super::output::{Output, Report};

/// Report data from a registry build.
#[derive(Debug)]
pub struct BuildReport {
    /// Warning messages from the pipeline.
    pub warnings: Vec<String>,
    /// Number of package entries without a recorded size.
    pub missing_sizes: usize,
    /// The finished registry.
    pub registry: Registry,
    /// Whether the registry was written or only previewed.
    pub result: BuildResult,
}

/// Outcome of the output step.
#[derive(Debug)]
pub enum BuildResult {
    /// The registry file was written.
    Written { path: PathBuf, write: WriteResult },
    /// Dry run: the JSON that would have been written.
    Preview { json: String },
}

impl Report for BuildReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            BuildResult::Written { path, write } => {
                let verb = match write {
                    WriteResult::Created => "Created",
                    WriteResult::Overwritten => "Overwrote",
                };
                out.key_value(verb, &path.display().to_string());
            }
            BuildResult::Preview { json } => {
                out.divider("registry.json");
                out.preformatted(json);
                out.divider("Summary");
            }
        }

        out.key_value("Handlers", &self.registry.len().to_string());
        out.key_value(
            "Packages",
            &format!(
                "{} ({} without size)",
                self.registry.package_count(),
                self.missing_sizes
            ),
        );
        out.divider("Registry");
        out.preformatted(&self.registry.to_string());
    }
}

#[cfg(test)]
mod tests {
    use pkgreg_core::Handler;

    use super::*;
    use crate::reports::output::BufferOutput;

    fn registry() -> Registry {
        [
            Handler::new("h1", vec!["c".into(), "a".into()]),
            Handler::new("h2", vec![]),
        ]
        .into_iter()
        .collect()
    }

    fn render(report: &BuildReport) -> String {
        let mut out = BufferOutput::default();
        report.render(&mut out);
        out.lines.join("\n")
    }

    #[test]
    fn test_render_written() {
        let report = BuildReport {
            warnings: vec!["invalid size 'foo' (sizes.txt:2)".into()],
            missing_sizes: 1,
            registry: registry(),
            result: BuildResult::Written {
                path: PathBuf::from("registry.json"),
                write: WriteResult::Created,
            },
        };

        insta::assert_snapshot!(render(&report), @r"
        warning: invalid size 'foo' (sizes.txt:2)
        Created: registry.json
        Handlers: 2
        Packages: 2 (1 without size)
        ── Registry ──
        [{Handle:h1 Pkgs:[c a]} {Handle:h2 Pkgs:[]}]
        ");
    }

    #[test]
    fn test_render_preview() {
        let registry = registry();
        let report = BuildReport {
            warnings: vec![],
            missing_sizes: 0,
            result: BuildResult::Preview {
                json: registry.to_json().unwrap(),
            },
            registry,
        };

        insta::assert_snapshot!(render(&report), @r#"
        ── registry.json ──
        [{"handle":"h1","pkgs":["c","a"]},{"handle":"h2","pkgs":[]}]
        ── Summary ──
        Handlers: 2
        Packages: 2 (0 without size)
        ── Registry ──
        [{Handle:h1 Pkgs:[c a]} {Handle:h2 Pkgs:[]}]
        "#);
    }
}
