//! Sort phase - orders packages by descending size.

use eyre::{Result, eyre};

use crate::{BuildContext, Diagnostic, Phase};

/// Phase that sorts each handler's packages, largest first.
///
/// Packages missing from the size table count as zero and are reported as
/// info diagnostics. Equal sizes keep their file order.
pub struct SortPhase;

impl Phase for SortPhase {
    fn name(&self) -> &'static str {
        "sort"
    }

    fn description(&self) -> &'static str {
        "Sort packages by descending size"
    }

    fn run(&self, ctx: &mut BuildContext) -> Result<()> {
        let sizes = ctx
            .sizes
            .as_ref()
            .ok_or_else(|| eyre!("size table not loaded - did LoadSizesPhase run?"))?;

        for handler in &mut ctx.handlers {
            for pkg in handler.pkgs.iter().filter(|pkg| !sizes.contains(pkg)) {
                ctx.diagnostics.push(
                    Diagnostic::info(self.name(), format!("no size recorded for '{}'", pkg))
                        .at(handler.handle.clone()),
                );
            }
            handler.sort_by_size(sizes);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pkgreg_core::{Handler, SizeTable};

    use super::*;
    use crate::BuildInputs;

    fn context(sizes: &[(&str, i64)], handlers: Vec<Handler>) -> BuildContext {
        let mut ctx = BuildContext::new(BuildInputs::new("handlers", "sizes.txt"));
        ctx.sizes = Some(sizes.iter().copied().collect::<SizeTable>());
        ctx.handlers = handlers;
        ctx
    }

    fn handler(name: &str, pkgs: &[&str]) -> Handler {
        Handler::new(name, pkgs.iter().map(|p| p.to_string()).collect())
    }

    #[test]
    fn test_sorts_descending() {
        let mut ctx = context(
            &[("a", 10), ("b", 5), ("c", 20)],
            vec![handler("h1", &["a", "b", "c"])],
        );

        SortPhase.run(&mut ctx).unwrap();

        assert_eq!(ctx.handlers[0].pkgs, vec!["c", "a", "b"]);
        assert!(ctx.diagnostics.is_empty());
    }

    #[test]
    fn test_missing_sizes_are_info() {
        let mut ctx = context(&[("a", 1)], vec![handler("h1", &["x", "a", "y"])]);

        SortPhase.run(&mut ctx).unwrap();

        assert_eq!(ctx.handlers[0].pkgs, vec!["a", "x", "y"]);
        assert!(!ctx.has_warnings());
        let infos: Vec<_> = ctx.infos().map(|d| d.message.as_str()).collect();
        assert_eq!(
            infos,
            vec!["no size recorded for 'x'", "no size recorded for 'y'"]
        );
    }

    #[test]
    fn test_requires_sizes() {
        let mut ctx = BuildContext::new(BuildInputs::new("handlers", "sizes.txt"));
        assert!(SortPhase.run(&mut ctx).is_err());
    }
}
