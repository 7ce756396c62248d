//! File Renamer - moves the template-named files to their derived names.
//!
//! Each rename is independent: a failure is recorded and the next entry is
//! attempted.

use std::path::Path;

use tracing::{info, instrument, warn};

use crate::{
    application::ports::Filesystem,
    domain::{FileTransformPlan, RenameOp, Stage, TransformResult},
};

pub struct FileRenamer<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> FileRenamer<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Apply every rename in `plan`, resolving paths against `root`.
    #[instrument(skip_all, fields(root = %root.display(), renames = plan.len()))]
    pub fn rename(&self, root: &Path, plan: FileTransformPlan) -> Vec<TransformResult> {
        plan.into_iter()
            .map(|op| self.rename_one(root, &op))
            .collect()
    }

    fn rename_one(&self, root: &Path, op: &RenameOp) -> TransformResult {
        let from = root.join(op.source.as_path());
        let to = root.join(op.target.as_path());
        let subject = op.to_string();

        if !self.filesystem.exists(&from) {
            warn!(source = %from.display(), "Rename source missing");
            return TransformResult::failure(Stage::Rename, subject, "source does not exist");
        }

        if op.is_identity() {
            info!(path = %from.display(), "Already named, nothing to rename");
            return TransformResult::success(Stage::Rename, subject).with_detail("already named");
        }

        if self.filesystem.exists(&to) {
            warn!(target = %to.display(), "Rename target already exists");
            return TransformResult::failure(Stage::Rename, subject, "target already exists");
        }

        match self.filesystem.rename(&from, &to) {
            Ok(()) => {
                info!(from = %from.display(), to = %to.display(), "Renamed");
                TransformResult::success(Stage::Rename, subject)
            }
            Err(e) => {
                warn!(error = %e, "Rename failed");
                TransformResult::failure(Stage::Rename, subject, e.reason())
            }
        }
    }
}
