//! Handler directory discovery.

use std::path::{Path, PathBuf};

use crate::{Error, PACKAGES_FILE, Result};

/// A handler directory found under the handlers root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerDir {
    /// Directory name, used as the handler's `handle`.
    pub name: String,
    pub path: PathBuf,
}

impl HandlerDir {
    /// Path of this handler's package list.
    pub fn packages_path(&self) -> PathBuf {
        self.path.join(PACKAGES_FILE)
    }
}

/// Entries found under the handlers root.
#[derive(Debug, Clone, Default)]
pub struct Discovery {
    /// Handler directories, sorted by name.
    pub handlers: Vec<HandlerDir>,
    /// Names of entries that are not directories, sorted.
    pub stray: Vec<String>,
}

/// List handler directories under `root`.
///
/// Entries are sorted by name so the registry order does not depend on the
/// platform's directory listing. Symlinks to directories count as handlers.
pub fn discover_handlers(root: impl AsRef<Path>) -> Result<Discovery> {
    let root = root.as_ref();
    let read_dir_error = |source: std::io::Error| {
        Box::new(Error::ReadDir {
            path: root.to_path_buf(),
            source,
        })
    };

    let mut discovery = Discovery::default();
    for entry in std::fs::read_dir(root).map_err(read_dir_error)? {
        let entry = entry.map_err(read_dir_error)?;
        let name = entry.file_name().to_string_lossy().into_owned();
        let path = entry.path();

        if path.is_dir() {
            discovery.handlers.push(HandlerDir { name, path });
        } else {
            discovery.stray.push(name);
        }
    }

    discovery.handlers.sort_by(|a, b| a.name.cmp(&b.name));
    discovery.stray.sort();
    Ok(discovery)
}
