use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::DomainError;
use crate::domain::identifiers::DerivedIdentifiers;

/// A filesystem path guaranteed to be relative.
///
/// Invariant: Never absolute. Enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// Fallible constructor.
    pub fn try_new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        if path.is_absolute() {
            Err(DomainError::AbsolutePathNotAllowed {
                path: path.display().to_string(),
            })
        } else {
            Ok(Self(path))
        }
    }

    /// Join a segment, maintaining relative invariant.
    pub fn join(&self, segment: impl AsRef<Path>) -> Result<Self, DomainError> {
        let segment = segment.as_ref();
        if segment.is_absolute() {
            return Err(DomainError::AbsolutePathNotAllowed {
                path: segment.display().to_string(),
            });
        }
        Ok(Self(self.0.join(segment)))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// One planned move, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenameOp {
    pub source: RelativePath,
    pub target: RelativePath,
}

impl RenameOp {
    pub fn new(source: RelativePath, target: RelativePath) -> Self {
        Self { source, target }
    }

    /// Source and target name the same file.
    pub fn is_identity(&self) -> bool {
        self.source == self.target
    }
}

impl fmt::Display for RenameOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}

/// The renames to perform, computed once before anything is touched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileTransformPlan {
    ops: Vec<RenameOp>,
}

impl FileTransformPlan {
    /// Template file named after the plugin slug.
    pub const MAIN_FILE: &'static str = "plugin-name.php";
    /// Config file named after the plugin slug.
    pub const CONFIG_FILE: &'static str = "config/plugin-name.php";
    /// Command class named after the studly plugin name.
    pub const COMMAND_FILE: &'static str = "app/Commands/PluginNameCommand.php";

    pub fn new(ops: Vec<RenameOp>) -> Self {
        Self { ops }
    }

    /// The three fixed renames of the plugin boilerplate.
    pub fn for_identifiers(derived: &DerivedIdentifiers) -> Result<Self, DomainError> {
        let domain_file = format!("{}.php", derived.text_domain());
        let command_file = format!("{}Command.php", derived.plugin_name_studly());

        let config_dir = RelativePath::try_new("config")?;
        let commands_dir = RelativePath::try_new("app/Commands")?;

        Ok(Self::new(vec![
            RenameOp::new(
                RelativePath::try_new(Self::MAIN_FILE)?,
                RelativePath::try_new(&domain_file)?,
            ),
            RenameOp::new(
                RelativePath::try_new(Self::CONFIG_FILE)?,
                config_dir.join(&domain_file)?,
            ),
            RenameOp::new(
                RelativePath::try_new(Self::COMMAND_FILE)?,
                commands_dir.join(&command_file)?,
            ),
        ]))
    }

    pub fn ops(&self) -> &[RenameOp] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

impl IntoIterator for FileTransformPlan {
    type Item = RenameOp;
    type IntoIter = std::vec::IntoIter<RenameOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.into_iter()
    }
}

impl<'a> IntoIterator for &'a FileTransformPlan {
    type Item = &'a RenameOp;
    type IntoIter = std::slice::Iter<'a, RenameOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::identifiers::RawIdentifiers;

    fn derived(name: &str) -> DerivedIdentifiers {
        let raw = RawIdentifiers::builder()
            .plugin_name(name)
            .plugin_description("d")
            .vendor_name("v")
            .vendor_email("e")
            .vendor_uri("u")
            .build()
            .unwrap();
        DerivedIdentifiers::derive(&raw)
    }

    #[test]
    fn plan_has_three_fixed_renames() {
        let plan = FileTransformPlan::for_identifiers(&derived("Demo Plugin")).unwrap();
        let ops: Vec<String> = plan.ops().iter().map(|op| op.to_string()).collect();
        assert_eq!(
            ops,
            vec![
                "plugin-name.php -> demo-plugin.php".to_string(),
                format!(
                    "config/plugin-name.php -> {}",
                    Path::new("config").join("demo-plugin.php").display()
                ),
                format!(
                    "app/Commands/PluginNameCommand.php -> {}",
                    Path::new("app/Commands")
                        .join("DemoPluginCommand.php")
                        .display()
                ),
            ]
        );
    }

    #[test]
    fn identity_rename_detected() {
        let plan = FileTransformPlan::for_identifiers(&derived("plugin name")).unwrap();
        assert!(plan.ops().iter().all(RenameOp::is_identity));

        let plan = FileTransformPlan::for_identifiers(&derived("other")).unwrap();
        assert!(!plan.ops().iter().any(RenameOp::is_identity));
    }

    #[test]
    fn relative_path_rejects_absolute() {
        let root = if cfg!(windows) { "C:\\etc" } else { "/etc" };
        assert!(matches!(
            RelativePath::try_new(root),
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
    }

    #[test]
    fn relative_path_join_rejects_absolute_segment() {
        let base = RelativePath::try_new("config").unwrap();
        let segment = if cfg!(windows) { "C:\\x" } else { "/x" };
        assert!(base.join(segment).is_err());
    }
}
