//! Scan phase - reads every handler's package list.

use eyre::Result;
use pkgreg_core::Handler;
use pkgreg_input::{Error, discover_handlers, read_packages};

use super::{fatal, record_issues};
use crate::{BuildContext, Diagnostic, Phase};

/// Phase that discovers handler directories and reads their packages.
///
/// Handlers are added in name order with packages in file order. A handler
/// without a readable `packages.txt` fails the whole build.
pub struct ScanPhase;

impl Phase for ScanPhase {
    fn name(&self) -> &'static str {
        "scan"
    }

    fn description(&self) -> &'static str {
        "Discover handlers and read their package lists"
    }

    fn run(&self, ctx: &mut BuildContext) -> Result<()> {
        let root = ctx.inputs.handlers_dir.clone();
        let discovery = discover_handlers(&root).map_err(fatal)?;

        if let Some(name) = discovery.stray.first()
            && ctx.inputs.strict
        {
            return Err(fatal(Error::stray_entry(name, &root)));
        }
        for name in &discovery.stray {
            tracing::debug!(entry = %name, "skipping non-directory entry");
            ctx.add_diagnostic(
                Diagnostic::warning(self.name(), format!("skipped '{}': not a directory", name))
                    .at(root.join(name).display().to_string()),
            );
        }

        for dir in discovery.handlers {
            let parsed = read_packages(&dir.name, dir.packages_path()).map_err(fatal)?;
            record_issues(ctx, self.name(), &parsed)?;

            tracing::trace!(handle = %dir.name, packages = parsed.value.len(), "handler scanned");
            ctx.handlers.push(Handler::new(dir.name, parsed.value));
        }

        tracing::debug!(handlers = ctx.handlers.len(), "handlers scanned");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::BuildInputs;

    fn add_handler(temp: &TempDir, name: &str, packages: &str) {
        let dir = temp.path().join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("packages.txt"), packages).unwrap();
    }

    fn context(temp: &TempDir, strict: bool) -> BuildContext {
        BuildContext::new(BuildInputs::new(temp.path(), "sizes.txt").strict(strict))
    }

    #[test]
    fn test_scans_in_name_order() {
        let temp = TempDir::new().unwrap();
        add_handler(&temp, "h2", "0:z\n");
        add_handler(&temp, "h1", "0:a\n1:b\n");
        let mut ctx = context(&temp, false);

        ScanPhase.run(&mut ctx).unwrap();

        assert_eq!(
            ctx.handlers,
            vec![
                Handler::new("h1", vec!["a".into(), "b".into()]),
                Handler::new("h2", vec!["z".into()]),
            ]
        );
    }

    #[test]
    fn test_missing_package_list_fails() {
        let temp = TempDir::new().unwrap();
        add_handler(&temp, "h1", "0:a\n");
        fs::create_dir(temp.path().join("h2")).unwrap();
        let mut ctx = context(&temp, false);

        let err = ScanPhase.run(&mut ctx).unwrap_err();

        match err.downcast_ref::<Error>() {
            Some(Error::PackageList { handle, .. }) => assert_eq!(handle, "h2"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_stray_file_warns() {
        let temp = TempDir::new().unwrap();
        add_handler(&temp, "h1", "0:a\n");
        fs::write(temp.path().join("notes.txt"), "").unwrap();
        let mut ctx = context(&temp, false);

        ScanPhase.run(&mut ctx).unwrap();

        assert_eq!(ctx.handlers.len(), 1);
        assert_eq!(ctx.warning_count(), 1);
        assert!(ctx.warnings().next().unwrap().message.contains("notes.txt"));
    }

    #[test]
    fn test_stray_file_strict_fails() {
        let temp = TempDir::new().unwrap();
        add_handler(&temp, "h1", "0:a\n");
        fs::write(temp.path().join("notes.txt"), "").unwrap();
        let mut ctx = context(&temp, true);

        let err = ScanPhase.run(&mut ctx).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::StrayEntry { .. })
        ));
    }

    #[test]
    fn test_malformed_line_warns() {
        let temp = TempDir::new().unwrap();
        add_handler(&temp, "h1", "0:a\nbroken\n1:b\n");
        let mut ctx = context(&temp, false);

        ScanPhase.run(&mut ctx).unwrap();

        assert_eq!(ctx.handlers[0].pkgs, vec!["a", "b"]);
        let warning = ctx.warnings().next().unwrap();
        assert!(warning.location.as_deref().unwrap().ends_with("packages.txt:2"));
    }

    #[test]
    fn test_empty_root() {
        let temp = TempDir::new().unwrap();
        let mut ctx = context(&temp, false);

        ScanPhase.run(&mut ctx).unwrap();

        assert!(ctx.handlers.is_empty());
    }
}
