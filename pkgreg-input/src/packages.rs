//! Per-handler package list: one `<index>:<package>` record per line.

use std::path::Path;

use crate::{Error, IssueKind, LineIssue, Parsed, Result, SourceContext, issue::lines, read_lossy};

/// Name of the package list file inside each handler directory.
pub const PACKAGES_FILE: &str = "packages.txt";

const LINE_FORMAT: &str = "<index>:<package>";

/// Read and parse the package list of a handler.
pub fn read_packages(handle: &str, path: impl AsRef<Path>) -> Result<Parsed<Vec<String>>> {
    let path = path.as_ref();
    let content = read_lossy(path).map_err(|source| {
        Box::new(Error::PackageList {
            handle: handle.to_string(),
            path: path.to_path_buf(),
            source,
        })
    })?;
    Ok(parse_packages(&content, &path.display().to_string()))
}

/// Parse package list content.
///
/// The field before the first `:` is ignored; the rest of the line is the
/// package name. Names are returned in file order, duplicates included.
pub fn parse_packages(content: &str, filename: &str) -> Parsed<Vec<String>> {
    let mut pkgs = Vec::new();
    let mut issues = Vec::new();

    for (line, offset, text) in lines(content) {
        match text.split_once(':') {
            Some((_, name)) => pkgs.push(name.to_string()),
            None => issues.push(LineIssue {
                line,
                span: offset..offset + text.len(),
                kind: IssueKind::MissingSeparator {
                    expected: LINE_FORMAT,
                },
            }),
        }
    }

    Parsed {
        value: pkgs,
        issues,
        source: SourceContext::new(content, filename),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_parse_packages_keeps_order() {
        let parsed = parse_packages("0:a\n1:b\n2:c\n", PACKAGES_FILE);

        assert_eq!(parsed.value, vec!["a", "b", "c"]);
        assert!(!parsed.has_issues());
    }

    #[test]
    fn test_first_field_ignored() {
        let parsed = parse_packages("core:numpy\n:scipy\n7:a:b\n", PACKAGES_FILE);

        assert_eq!(parsed.value, vec!["numpy", "scipy", "a:b"]);
    }

    #[test]
    fn test_duplicates_kept() {
        let parsed = parse_packages("0:a\n1:a\n", PACKAGES_FILE);
        assert_eq!(parsed.value, vec!["a", "a"]);
    }

    #[test]
    fn test_missing_separator_skipped() {
        let parsed = parse_packages("0:a\nnumpy\n", PACKAGES_FILE);

        assert_eq!(parsed.value, vec!["a"]);
        assert_eq!(parsed.issues.len(), 1);
        assert_eq!(parsed.issues[0].line, 2);
        assert_eq!(parsed.issues[0].span, 4..9);
    }

    #[test]
    fn test_read_packages_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = read_packages("h1", temp.path().join(PACKAGES_FILE)).unwrap_err();

        match *err {
            Error::PackageList { ref handle, .. } => assert_eq!(handle, "h1"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_read_packages_from_disk() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(PACKAGES_FILE);
        fs::write(&path, "0:x\r\n1:y\r\n").unwrap();

        let parsed = read_packages("h1", &path).unwrap();

        assert_eq!(parsed.value, vec!["x", "y"]);
    }
}
