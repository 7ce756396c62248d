//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `PLUGKIT_` prefix, `__` between sections,
//!    e.g. `PLUGKIT_DEFAULTS__VENDOR_NAME=acme`
//! 3. Config file: `--config FILE`, else the platform config directory
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use plugkit_core::domain::BootstrapStage;

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Suggested answers for the identifier prompts.
    pub defaults: Defaults,
    pub bootstrap: BootstrapConfig,
    pub walk: WalkConfig,
    pub output: OutputConfig,
}

/// Initial values offered when prompting. Used directly when no prompt is
/// possible.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_uri: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig {
    /// `false` behaves like `--skip-bootstrap` on every run.
    pub enabled: bool,
    /// Stages run in order after substitution.
    pub stages: Vec<BootstrapStage>,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            stages: BootstrapStage::defaults(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkConfig {
    /// Directory names never descended into, e.g. `.git` or `node_modules`.
    pub exclude: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`. The `--output-format` flag wins
    /// unless it is left at `auto`.
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration, layering file and environment over the defaults.
    ///
    /// An explicit `config_file` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        debug!(path = %path.display(), required, "Loading configuration");

        // Missing keys fall back through `#[serde(default)]`. Layering the
        // defaults as a source would merge arrays index by index.
        Config::builder()
            .add_source(File::new(&path.to_string_lossy(), FileFormat::Toml).required(required))
            .add_source(
                Environment::with_prefix("PLUGKIT")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("walk.exclude"),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.plugkit.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "plugkit", "plugkit")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".plugkit.toml"))
    }

    /// The file `load` reads for the given `--config` value.
    pub fn active_path(config_file: Option<&Path>) -> PathBuf {
        config_file
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_path)
    }

    /// Bootstrap stages to run, honouring `enabled` and `--skip-bootstrap`.
    pub fn stages(&self, skip_bootstrap: bool) -> Vec<BootstrapStage> {
        if skip_bootstrap || !self.bootstrap.enabled {
            Vec::new()
        } else {
            self.bootstrap.stages.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_bootstrap_runs_composer_npm_git() {
        let cfg = AppConfig::default();
        let names: Vec<_> = cfg.bootstrap.stages.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["composer", "npm", "git"]);
        assert!(cfg.bootstrap.enabled);
    }

    #[test]
    fn default_walk_excludes_nothing() {
        assert!(AppConfig::default().walk.exclude.is_empty());
    }

    #[test]
    fn skip_bootstrap_empties_stages() {
        let cfg = AppConfig::default();
        assert!(cfg.stages(true).is_empty());
        assert_eq!(cfg.stages(false).len(), 3);
    }

    #[test]
    fn disabled_bootstrap_empties_stages() {
        let mut cfg = AppConfig::default();
        cfg.bootstrap.enabled = false;
        assert!(cfg.stages(false).is_empty());
    }

    #[test]
    fn file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[defaults]
vendor_name = "acme"

[walk]
exclude = [".git", "node_modules"]

[[bootstrap.stages]]
name = "make"
steps = [{{ program = "make", args = ["all"] }}]
"#
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&file.path().to_path_buf())).unwrap();

        assert_eq!(cfg.defaults.vendor_name.as_deref(), Some("acme"));
        assert_eq!(cfg.walk.exclude, [".git", "node_modules"]);
        assert_eq!(cfg.bootstrap.stages.len(), 1);
        assert_eq!(cfg.bootstrap.stages[0].command_line(), "make all");
        assert!(cfg.bootstrap.enabled);
        assert_eq!(cfg.output.format, "auto");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let missing = PathBuf::from("/definitely/not/here/plugkit.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }

    #[test]
    fn active_path_prefers_explicit() {
        let explicit = Path::new("/tmp/x.toml");
        assert_eq!(AppConfig::active_path(Some(explicit)), explicit);
    }
}
