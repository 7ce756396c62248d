//! Tree Walker - substitutes placeholders in every regular file of a tree.
//!
//! Fault-isolating, not transactional: a file that cannot be read or written
//! is recorded and the walk continues. Files already rewritten stay rewritten.

use std::path::Path;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{DerivedIdentifiers, Stage, TokenTable, TransformResult},
    error::{PlugkitError, PlugkitResult},
};

pub struct TreeWalker<'a> {
    filesystem: &'a dyn Filesystem,
    exclude: &'a [String],
}

impl<'a> TreeWalker<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self {
            filesystem,
            exclude: &[],
        }
    }

    /// Directory names to prune from the walk.
    pub fn excluding(mut self, exclude: &'a [String]) -> Self {
        self.exclude = exclude;
        self
    }

    #[instrument(skip_all, fields(root = %root.display()))]
    pub fn walk_and_substitute(
        &self,
        root: &Path,
        derived: &DerivedIdentifiers,
    ) -> Vec<TransformResult> {
        let table = TokenTable::for_identifiers(derived);

        let results: Vec<TransformResult> = self
            .filesystem
            .walk_files(root, self.exclude)
            .into_iter()
            .map(|entry| match entry {
                Ok(path) => self.substitute_file(root, &path, &table),
                Err(e) => {
                    warn!(error = %e, "Could not enumerate entry");
                    TransformResult::failure(Stage::Substitute, subject_of(&e, root), e.reason())
                }
            })
            .collect();

        info!(
            files = results.len(),
            failed = results.iter().filter(|r| !r.succeeded).count(),
            "Substitution finished"
        );
        results
    }

    fn substitute_file(&self, root: &Path, path: &Path, table: &TokenTable) -> TransformResult {
        let subject = display_relative(root, path);

        match self.rewrite(path, table) {
            Ok(changed) => {
                debug!(path = %subject, changed, "Substituted");
                let result = TransformResult::success(Stage::Substitute, subject);
                if changed {
                    result
                } else {
                    result.with_detail("no placeholders")
                }
            }
            Err(e) => {
                warn!(path = %subject, error = %e, "Substitution failed");
                TransformResult::failure(Stage::Substitute, subject, e.reason())
            }
        }
    }

    /// Read, substitute, write back. Returns whether any placeholder matched.
    fn rewrite(&self, path: &Path, table: &TokenTable) -> PlugkitResult<bool> {
        let contents = self.filesystem.read(path)?;
        let changed = table.contains_tokens(&contents);
        let substituted = table.apply_bytes(&contents);
        self.filesystem.write(path, &substituted)?;
        Ok(changed)
    }
}

fn display_relative(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

fn subject_of(err: &PlugkitError, root: &Path) -> String {
    match err {
        PlugkitError::Application(ApplicationError::FileIo { path, .. }) => {
            display_relative(root, path)
        }
        _ => root.display().to_string(),
    }
}
