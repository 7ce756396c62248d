//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `plugkit-adapters` crate provides the filesystem and process
//! implementations; the CLI provides the prompter and observer.

use std::path::{Path, PathBuf};

use crate::domain::{CommandStep, DerivedIdentifiers, RawIdentifiers, Stage, TransformResult};
use crate::error::PlugkitResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `plugkit_adapters::filesystem::LocalFilesystem` (production)
/// - `plugkit_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists (file, directory or link).
    fn exists(&self, path: &Path) -> bool;

    /// Move `from` to `to`. Must not silently replace an existing `to`.
    fn rename(&self, from: &Path, to: &Path) -> PlugkitResult<()>;

    /// Read a file's full contents.
    fn read(&self, path: &Path) -> PlugkitResult<Vec<u8>>;

    /// Replace a file's contents.
    fn write(&self, path: &Path, contents: &[u8]) -> PlugkitResult<()>;

    /// Every regular file under `root`, recursively.
    ///
    /// Directories, symlinks and special files are not listed. Directories
    /// whose name is in `exclude` are pruned. An entry that cannot be
    /// enumerated comes back as an `Err` in place, so one bad directory
    /// does not hide the rest of the tree.
    fn walk_files(&self, root: &Path, exclude: &[String]) -> Vec<PlugkitResult<PathBuf>>;
}

/// What a finished external command reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stderr: String,
}

impl CommandOutput {
    pub fn ok() -> Self {
        Self {
            success: true,
            code: Some(0),
            stderr: String::new(),
        }
    }

    pub fn failed(code: Option<i32>, stderr: impl Into<String>) -> Self {
        Self {
            success: false,
            code,
            stderr: stderr.into(),
        }
    }
}

/// Port for running external commands.
///
/// Implemented by:
/// - `plugkit_adapters::process::SystemRunner` (production)
/// - `plugkit_adapters::process::ScriptedRunner` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner: Send + Sync {
    /// Run `step` in `cwd` to completion.
    ///
    /// `Err` means the process could not be launched; a non-zero exit is an
    /// `Ok` output with `success == false`.
    fn run(&self, step: &CommandStep, cwd: &Path) -> PlugkitResult<CommandOutput>;
}

/// Port for collecting identifiers and the go/no-go decision.
#[cfg_attr(test, mockall::automock)]
pub trait Prompter {
    /// Collect and validate the seven identifiers.
    fn collect(&self) -> PlugkitResult<RawIdentifiers>;

    /// Show the derived values and ask whether to proceed.
    fn confirm(&self, derived: &DerivedIdentifiers) -> PlugkitResult<bool>;
}

/// Progress notifications from a running initialization.
///
/// All methods default to no-ops.
pub trait InitObserver {
    fn stage_started(&self, _stage: Stage) {}

    /// A bootstrap stage is about to launch its commands.
    fn command_started(&self, _name: &str, _command_line: &str) {}

    fn unit_finished(&self, _result: &TransformResult) {}
}

/// Observer that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentObserver;

impl InitObserver for SilentObserver {}
