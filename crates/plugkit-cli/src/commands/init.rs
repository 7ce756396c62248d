//! Implementation of the `plugkit init` command.
//!
//! Responsibility: resolve the boilerplate root, wire the local adapters
//! into the core `Initializer`, and display the report. No business logic
//! lives here.

use std::path::{Path, PathBuf};

use serde_json::json;
use tracing::{debug, info, instrument};

use plugkit_adapters::{LocalFilesystem, SystemRunner};
use plugkit_core::{
    application::{InitOptions, InitOutcome, Initializer, ports::Prompter},
    domain::{DerivedIdentifiers, DomainValidator, FileTransformPlan},
    error::PlugkitError,
};

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    progress::ProgressObserver,
    prompt::TerminalPrompter,
};

/// Execute the `plugkit init` command.
///
/// 1. Resolve and check the boilerplate root
/// 2. Dry run: collect, derive and describe, then stop
/// 3. Otherwise run the initializer with the local filesystem and real
///    commands
/// 4. Print the report; any failed unit makes the command fail
#[instrument(skip_all, fields(path = %args.path.display()))]
pub fn execute(
    args: InitArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let root = resolve_root(&args.path)?;
    debug!(root = %root.display(), "Boilerplate root resolved");

    let prompter = TerminalPrompter::new(&args, &config, &output);

    if args.dry_run {
        return dry_run(&prompter, &root, &args, &config, &output);
    }

    let options = InitOptions::new(&root)
        .with_stages(config.stages(args.skip_bootstrap))
        .with_exclude(config.walk.exclude.clone());
    let initializer = Initializer::new(
        Box::new(LocalFilesystem::new()),
        Box::new(SystemRunner::new()),
        options,
    );

    let outcome = {
        let observer = ProgressObserver::new(&output);
        initializer.run(&prompter, &observer)?
    };

    let (identifiers, report) = match outcome {
        InitOutcome::Cancelled => return Err(CliError::Cancelled),
        InitOutcome::Completed {
            identifiers,
            report,
        } => (identifiers, report),
    };

    output.print("")?;
    output.report(&report)?;
    output.json(&json!({
        "root": root,
        "identifiers": identifiers,
        "report": report,
        "clean": report.is_clean(),
    }))?;

    if report.is_clean() {
        info!(plugin = identifiers.plugin_name(), "Plugin initialized");
        Ok(())
    } else {
        Err(CliError::InitializationIncomplete {
            failed: report.failure_count(),
            total: report.len(),
        })
    }
}

/// Show what a run would do without touching the tree.
fn dry_run(
    prompter: &dyn Prompter,
    root: &Path,
    args: &InitArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let raw = prompter.collect()?;
    DomainValidator::validate_identifiers(&raw).map_err(PlugkitError::from)?;
    let derived = DerivedIdentifiers::derive(&raw);
    let plan = FileTransformPlan::for_identifiers(&derived).map_err(PlugkitError::from)?;
    let stages = config.stages(args.skip_bootstrap);

    output.preview(&derived)?;
    output.plan(&plan)?;

    output.header("Bootstrap")?;
    if stages.is_empty() {
        output.print("  (skipped)")?;
    }
    for stage in &stages {
        output.print(&format!("  {}: {}", stage.name, stage.command_line()))?;
    }
    output.print("")?;
    output.info("Dry run: nothing was changed")?;

    output.json(&json!({
        "root": root,
        "dry_run": true,
        "identifiers": derived,
        "renames": plan,
        "bootstrap": stages,
    }))?;

    Ok(())
}

/// Canonical form of `path`, which must be an existing directory.
pub fn resolve_root(path: &Path) -> CliResult<PathBuf> {
    let root = path.canonicalize().map_err(|e| CliError::InvalidRoot {
        path: path.to_path_buf(),
        reason: format!("cannot be opened: {e}"),
    })?;

    if !root.is_dir() {
        return Err(CliError::InvalidRoot {
            path: path.to_path_buf(),
            reason: "is not a directory".into(),
        });
    }

    Ok(root)
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn existing_directory_resolves() {
        let dir = tempfile::tempdir().unwrap();
        let root = resolve_root(dir.path()).unwrap();
        assert!(root.is_absolute());
        assert!(root.is_dir());
    }

    #[test]
    fn missing_directory_is_invalid_root() {
        let err = resolve_root(Path::new("/definitely/not/here")).unwrap_err();
        assert!(matches!(err, CliError::InvalidRoot { .. }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn file_is_invalid_root() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = resolve_root(file.path()).unwrap_err();
        assert!(matches!(err, CliError::InvalidRoot { reason, .. } if reason == "is not a directory"));
    }
}
