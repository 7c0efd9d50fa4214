use std::{
    io::Write,
    path::{Path, PathBuf},
};

use eyre::{Context, Result};
use tempfile::NamedTempFile;

/// Permissions for written files: read/write for the owner, read for others.
pub const DEFAULT_MODE: u32 = 0o644;

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File did not exist before
    Created,
    /// An existing file was replaced
    Overwritten,
}

/// A file to be written to disk
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given path and content (mode 0644)
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file, replacing any existing one.
    ///
    /// Content is staged in a temporary file next to the destination and
    /// renamed into place, so the destination is never left half-written.
    pub fn write(&self) -> Result<WriteResult> {
        let existed = self.exists();
        write_file(&self.path, &self.content, DEFAULT_MODE)
            .wrap_err_with(|| format!("failed to write '{}'", self.path.display()))?;

        Ok(if existed {
            WriteResult::Overwritten
        } else {
            WriteResult::Created
        })
    }
}

fn write_file(path: &Path, content: &str, mode: u32) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut staged = NamedTempFile::new_in(dir)?;
    staged.write_all(content.as_bytes())?;
    staged.as_file().sync_all()?;
    set_mode(staged.path(), mode)?;
    staged.persist(path)?;
    Ok(())
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
fn set_mode(_path: &Path, _mode: u32) -> std::io::Result<()> {
    Ok(())
}
