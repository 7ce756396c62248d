//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use plugkit_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{PlugkitError, PlugkitResult},
};

/// In-memory filesystem for testing.
///
/// Only files are stored; a directory exists when some file lives under it.
/// Paths can be marked read-only or unreadable to simulate permission
/// failures.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, Vec<u8>>,
    read_only: HashSet<PathBuf>,
    unreadable: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a file (testing helper).
    pub fn insert(&self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) {
        self.write_guard()
            .files
            .insert(path.into(), contents.into());
    }

    /// Make writes to `path` fail.
    pub fn mark_read_only(&self, path: impl Into<PathBuf>) {
        self.write_guard().read_only.insert(path.into());
    }

    /// Make reads of `path` fail.
    pub fn mark_unreadable(&self, path: impl Into<PathBuf>) {
        self.write_guard().unreadable.insert(path.into());
    }

    /// Read a file's content as text (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        self.read_guard()
            .files
            .get(path)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    fn read_guard(&self) -> RwLockReadGuard<'_, MemoryFilesystemInner> {
        // A poisoned lock only means another test thread panicked.
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_guard(&self) -> RwLockWriteGuard<'_, MemoryFilesystemInner> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        let inner = self.read_guard();
        inner.files.contains_key(path) || inner.files.keys().any(|p| p.starts_with(path))
    }

    fn rename(&self, from: &Path, to: &Path) -> PlugkitResult<()> {
        let mut inner = self.write_guard();

        let failed = |reason: &str| -> PlugkitError {
            ApplicationError::RenameFailed {
                from: from.to_path_buf(),
                to: to.to_path_buf(),
                reason: reason.into(),
            }
            .into()
        };

        if inner.files.contains_key(to) {
            return Err(failed("target already exists"));
        }
        if inner.read_only.contains(from) {
            return Err(failed("permission denied"));
        }
        let contents = inner
            .files
            .remove(from)
            .ok_or_else(|| failed("No such file or directory"))?;
        inner.files.insert(to.to_path_buf(), contents);
        Ok(())
    }

    fn read(&self, path: &Path) -> PlugkitResult<Vec<u8>> {
        let inner = self.read_guard();
        if inner.unreadable.contains(path) {
            return Err(io_error(path, "read", "permission denied"));
        }
        inner
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| io_error(path, "read", "No such file or directory"))
    }

    fn write(&self, path: &Path, contents: &[u8]) -> PlugkitResult<()> {
        let mut inner = self.write_guard();
        if inner.read_only.contains(path) {
            return Err(io_error(path, "write", "permission denied"));
        }
        inner.files.insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }

    fn walk_files(&self, root: &Path, exclude: &[String]) -> Vec<PlugkitResult<PathBuf>> {
        self.read_guard()
            .files
            .keys()
            .filter(|path| path.starts_with(root))
            .filter(|path| {
                let relative = path.strip_prefix(root).unwrap_or(path);
                // Only directory components count towards exclusion.
                let mut dirs = relative.components().rev().skip(1);
                !dirs.any(|c| exclude.iter().any(|name| c.as_os_str() == name.as_str()))
            })
            .cloned()
            .map(Ok)
            .collect()
    }
}

fn io_error(path: &Path, operation: &'static str, reason: &str) -> PlugkitError {
    ApplicationError::FileIo {
        path: path.to_path_buf(),
        operation,
        reason: reason.into(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directories_exist_implicitly() {
        let fs = MemoryFilesystem::new();
        fs.insert("/p/config/a.php", "x");

        assert!(fs.exists(Path::new("/p/config")));
        assert!(fs.exists(Path::new("/p/config/a.php")));
        assert!(!fs.exists(Path::new("/p/other")));
    }

    #[test]
    fn rename_rejects_existing_target() {
        let fs = MemoryFilesystem::new();
        fs.insert("/p/a", "a");
        fs.insert("/p/b", "b");

        assert!(fs.rename(Path::new("/p/a"), Path::new("/p/b")).is_err());
        assert_eq!(fs.read_file(Path::new("/p/b")).as_deref(), Some("b"));
    }

    #[test]
    fn read_only_blocks_write() {
        let fs = MemoryFilesystem::new();
        fs.insert("/p/a", "a");
        fs.mark_read_only("/p/a");

        let err = fs.write(Path::new("/p/a"), b"b").unwrap_err();

        assert!(err.to_string().contains("permission denied"));
        assert_eq!(fs.read_file(Path::new("/p/a")).as_deref(), Some("a"));
    }

    #[test]
    fn walk_prunes_excluded_directories_only() {
        let fs = MemoryFilesystem::new();
        fs.insert("/p/vendor/lib.php", "");
        fs.insert("/p/src/vendor", "");
        fs.insert("/p/main.php", "");
        fs.insert("/elsewhere.php", "");

        let files: Vec<PathBuf> = fs
            .walk_files(Path::new("/p"), &["vendor".to_string()])
            .into_iter()
            .map(Result::unwrap)
            .collect();

        assert_eq!(
            files,
            vec![PathBuf::from("/p/main.php"), PathBuf::from("/p/src/vendor")]
        );
    }
}
