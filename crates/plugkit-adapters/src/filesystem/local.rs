//! Local filesystem adapter using std::fs.

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};
use walkdir::WalkDir;

use plugkit_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{PlugkitError, PlugkitResult},
};

/// Production filesystem implementation using `std::fs`.
///
/// Symbolic links are never followed: a link is neither listed by the walk
/// nor descended into.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.symlink_metadata().is_ok()
    }

    fn rename(&self, from: &Path, to: &Path) -> PlugkitResult<()> {
        // std::fs::rename silently replaces files on Unix.
        if self.exists(to) {
            return Err(ApplicationError::RenameFailed {
                from: from.to_path_buf(),
                to: to.to_path_buf(),
                reason: "target already exists".into(),
            }
            .into());
        }

        std::fs::rename(from, to).map_err(|e| {
            ApplicationError::RenameFailed {
                from: from.to_path_buf(),
                to: to.to_path_buf(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn read(&self, path: &Path) -> PlugkitResult<Vec<u8>> {
        std::fs::read(path).map_err(|e| map_io_error(path, e, "read"))
    }

    fn write(&self, path: &Path, contents: &[u8]) -> PlugkitResult<()> {
        std::fs::write(path, contents).map_err(|e| map_io_error(path, e, "write"))
    }

    fn walk_files(&self, root: &Path, exclude: &[String]) -> Vec<PlugkitResult<PathBuf>> {
        let walker = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                entry.depth() == 0
                    || !entry.file_type().is_dir()
                    || !exclude
                        .iter()
                        .any(|name| entry.file_name() == std::ffi::OsStr::new(name))
            });

        let mut files = Vec::new();
        for entry in walker {
            match entry {
                Ok(entry) if entry.file_type().is_file() => {
                    trace!(path = %entry.path().display(), "Found file");
                    files.push(Ok(entry.into_path()));
                }
                Ok(entry) => {
                    trace!(path = %entry.path().display(), "Skipping non-file entry");
                }
                Err(e) => {
                    let path = e.path().unwrap_or(root).to_path_buf();
                    debug!(path = %path.display(), error = %e, "Walk error");
                    let reason = e
                        .io_error()
                        .map(ToString::to_string)
                        .unwrap_or_else(|| e.to_string());
                    files.push(Err(ApplicationError::FileIo {
                        path,
                        operation: "read directory",
                        reason,
                    }
                    .into()));
                }
            }
        }
        files
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &'static str) -> PlugkitError {
    ApplicationError::FileIo {
        path: path.to_path_buf(),
        operation,
        reason: e.to_string(),
    }
    .into()
}
