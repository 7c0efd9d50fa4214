//! Size table file: one `<package>:<size>` record per line.

use std::path::Path;

use pkgreg_core::{Size, SizeTable};

use crate::{
    Error, IssueKind, LineIssue, Parsed, Result, SourceContext, issue::lines, read_lossy,
};

const LINE_FORMAT: &str = "<package>:<size>";

/// Read and parse a size table file.
///
/// Fails only if the file cannot be read. Malformed lines are recorded as
/// issues on the result.
pub fn read_sizes(path: impl AsRef<Path>) -> Result<Parsed<SizeTable>> {
    let path = path.as_ref();
    let content = read_lossy(path).map_err(|e| Error::io(path, e))?;
    Ok(parse_sizes(&content, &path.display().to_string()))
}

/// Parse size table content.
///
/// Splits each line on its first `:`. A size that is not an integer is
/// stored as zero. When a package appears more than once the
/// last line wins.
pub fn parse_sizes(content: &str, filename: &str) -> Parsed<SizeTable> {
    let mut table = SizeTable::new();
    let mut issues = Vec::new();

    for (line, offset, text) in lines(content) {
        let Some((name, raw_size)) = text.split_once(':') else {
            issues.push(LineIssue {
                line,
                span: offset..offset + text.len(),
                kind: IssueKind::MissingSeparator {
                    expected: LINE_FORMAT,
                },
            });
            continue;
        };

        let size = match raw_size.parse::<Size>() {
            Ok(size) => size,
            Err(_) => {
                let start = offset + name.len() + 1;
                issues.push(LineIssue {
                    line,
                    span: start..start + raw_size.len(),
                    kind: IssueKind::InvalidSize {
                        value: raw_size.to_string(),
                    },
                });
                0
            }
        };
        table.insert(name, size);
    }

    Parsed {
        value: table,
        issues,
        source: SourceContext::new(content, filename),
    }
}
