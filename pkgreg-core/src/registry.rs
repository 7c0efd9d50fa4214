use std::fmt;

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::SizeTable;

/// A handler and the packages it registers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Handler {
    /// Handler name, taken from its directory name.
    pub handle: String,
    /// Package names, largest first once sorted.
    pub pkgs: Vec<String>,
}

impl Handler {
    /// Create a handler with packages in their listed order.
    pub fn new(handle: impl Into<String>, pkgs: Vec<String>) -> Self {
        Self {
            handle: handle.into(),
            pkgs,
        }
    }

    /// Sort this handler's packages by descending size.
    pub fn sort_by_size(&mut self, sizes: &SizeTable) {
        sizes.sort_desc(&mut self.pkgs);
    }
}

impl fmt::Display for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{Handle:{} Pkgs:[{}]}}", self.handle, self.pkgs.join(" "))
    }
}

/// The ordered collection of handlers written to `registry.json`.
///
/// Serializes as a bare JSON array of handlers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Registry {
    handlers: Vec<Handler>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a handler, keeping insertion order.
    pub fn push(&mut self, handler: Handler) {
        self.handlers.push(handler);
    }

    pub fn handlers(&self) -> &[Handler] {
        &self.handlers
    }

    /// Find a handler by name.
    pub fn get(&self, handle: &str) -> Option<&Handler> {
        self.handlers.iter().find(|h| h.handle == handle)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Total number of package entries across all handlers.
    pub fn package_count(&self) -> usize {
        self.handlers.iter().map(|h| h.pkgs.len()).sum()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Handler> {
        self.handlers.iter()
    }

    /// Encode as compact JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).wrap_err("failed to encode registry")
    }

    /// Decode a registry previously written with [`Registry::to_json`].
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).wrap_err("failed to decode registry")
    }
}

impl FromIterator<Handler> for Registry {
    fn from_iter<I: IntoIterator<Item = Handler>>(iter: I) -> Self {
        Self {
            handlers: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Handler;
    type IntoIter = std::slice::Iter<'a, Handler>;

    fn into_iter(self) -> Self::IntoIter {
        self.handlers.iter()
    }
}

impl fmt::Display for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, handler) in self.handlers.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", handler)?;
        }
        write!(f, "]")
    }
}
