//! Soft issues found while parsing line-based input files.
//!
//! Malformed lines never abort parsing. Each one is recorded here with its
//! position so callers can warn about it or, in strict mode, reject it.

use std::ops::Range;

use crate::SourceContext;

/// What is wrong with a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    /// The size field is not an unsigned integer; the size falls back to zero.
    InvalidSize { value: String },
    /// The line has no `:` separator and was skipped.
    MissingSeparator { expected: &'static str },
}

impl IssueKind {
    pub fn message(&self) -> String {
        match self {
            IssueKind::InvalidSize { value } => format!("invalid size '{}'", value),
            IssueKind::MissingSeparator { .. } => "missing ':' separator".to_string(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IssueKind::InvalidSize { .. } => "not an integer",
            IssueKind::MissingSeparator { .. } => "expected ':'",
        }
    }

    pub fn help(&self) -> String {
        match self {
            IssueKind::InvalidSize { .. } => {
                "sizes must be whole numbers, e.g. 'numpy:2048'".to_string()
            }
            IssueKind::MissingSeparator { expected } => {
                format!("lines must have the form '{}'", expected)
            }
        }
    }
}

/// A malformed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIssue {
    /// 1-based line number.
    pub line: usize,
    /// Byte range of the offending text within the file.
    pub span: Range<usize>,
    pub kind: IssueKind,
}

/// Parsed file content together with the soft issues found in it.
#[derive(Debug, Clone)]
pub struct Parsed<T> {
    pub value: T,
    pub issues: Vec<LineIssue>,
    pub source: SourceContext,
}

impl<T> Parsed<T> {
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    /// Location string (`file:line`) for an issue.
    pub fn location(&self, issue: &LineIssue) -> String {
        self.source.location(issue.line)
    }

    /// The first issue as a hard error, if there is one.
    pub fn first_error(&self) -> Option<Box<crate::Error>> {
        self.issues
            .first()
            .map(|issue| self.source.malformed_error(issue))
    }
}

/// Iterate over non-empty lines as `(line number, byte offset, text)`.
///
/// Line terminators (`\n` or `\r\n`) are not part of the text.
pub(crate) fn lines(content: &str) -> impl Iterator<Item = (usize, usize, &str)> {
    content
        .split_inclusive('\n')
        .scan(0usize, |offset, raw| {
            let start = *offset;
            *offset += raw.len();
            Some((start, raw))
        })
        .enumerate()
        .map(|(i, (start, raw))| {
            let text = raw.strip_suffix('\n').unwrap_or(raw);
            let text = text.strip_suffix('\r').unwrap_or(text);
            (i + 1, start, text)
        })
        .filter(|(_, _, text)| !text.is_empty())
}
