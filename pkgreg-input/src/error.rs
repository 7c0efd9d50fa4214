use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::LineIssue;

/// Result type for input operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Keeps an input file's content and display name together so malformed
/// lines can be reported with a labelled snippet.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Location of a line as `file:line`.
    pub fn location(&self, line: usize) -> String {
        format!("{}:{}", self.filename, line)
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Turn a soft line issue into a hard error pointing at the line.
    pub fn malformed_error(&self, issue: &LineIssue) -> Box<Error> {
        Box::new(Error::Malformed {
            src: self.named_source(),
            span: SourceSpan::from(issue.span.clone()),
            message: format!("{} on line {}", issue.kind.message(), issue.line),
            reason: issue.kind.label().to_string(),
            advice: issue.kind.help(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(pkgreg::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to list handlers in '{path}'")]
    #[diagnostic(
        code(pkgreg::read_dir),
        help("the first argument must be a directory with one folder per handler")
    )]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read package list of handler '{handle}' at '{path}'")]
    #[diagnostic(
        code(pkgreg::package_list),
        help("every handler directory needs a packages.txt with one '<index>:<package>' entry per line")
    )]
    PackageList {
        handle: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(pkgreg::malformed_line), help("{advice}"))]
    Malformed {
        #[source_code]
        src: NamedSource<String>,
        #[label("{reason}")]
        span: SourceSpan,
        message: String,
        reason: String,
        advice: String,
    },

    #[error("'{name}' in '{root}' is not a handler directory")]
    #[diagnostic(
        code(pkgreg::stray_entry),
        help("move '{name}' out of the handlers folder")
    )]
    StrayEntry { name: String, root: PathBuf },
}

impl Error {
    /// Create an I/O error for a path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }

    /// Create a stray entry error
    pub fn stray_entry(name: impl Into<String>, root: impl Into<PathBuf>) -> Box<Self> {
        Box::new(Error::StrayEntry {
            name: name.into(),
            root: root.into(),
        })
    }
}
