//! Initializer - main application orchestrator.
//!
//! Drives a linear state machine:
//!
//! ```text
//! CollectInput → Confirm → Rename → Substitute → Bootstrap → Done
//!                   └──────────────────────────────────────→ Cancelled
//! ```
//!
//! `Confirm` is the only decision point. Every later transition is
//! unconditional: a stage runs whatever the previous one reported, and all
//! results are folded into one report returned at `Done`.

use std::fmt;
use std::path::PathBuf;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ports::{CommandRunner, Filesystem, InitObserver, Prompter},
        services::{Bootstrapper, FileRenamer, TreeWalker},
    },
    domain::{
        BootstrapStage, DerivedIdentifiers, DomainValidator as validator, FileTransformPlan,
        RawIdentifiers, Stage, TransformReport, TransformResult,
    },
    error::PlugkitResult,
};

/// Where the run is. States carry what the next step needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitState {
    CollectInput,
    Confirm(RawIdentifiers),
    Rename(DerivedIdentifiers),
    Substitute(DerivedIdentifiers),
    Bootstrap(DerivedIdentifiers),
    Done(DerivedIdentifiers),
    Cancelled,
}

impl InitState {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CollectInput => "collect-input",
            Self::Confirm(_) => "confirm",
            Self::Rename(_) => "rename",
            Self::Substitute(_) => "substitute",
            Self::Bootstrap(_) => "bootstrap",
            Self::Done(_) => "done",
            Self::Cancelled => "cancelled",
        }
    }

    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Done(_) | Self::Cancelled)
    }
}

impl fmt::Display for InitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOutcome {
    /// The user declined; nothing was touched.
    Cancelled,
    /// Every stage ran. Individual units may still have failed.
    Completed {
        identifiers: DerivedIdentifiers,
        report: TransformReport,
    },
}

/// Settings for one run.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Project root the plan and walk are resolved against.
    pub root: PathBuf,
    /// Bootstrap stages, in order. Empty skips the stage's work.
    pub stages: Vec<BootstrapStage>,
    /// Directory names pruned from the walk.
    pub exclude: Vec<String>,
}

impl InitOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            stages: BootstrapStage::defaults(),
            exclude: Vec::new(),
        }
    }

    pub fn with_stages(mut self, stages: Vec<BootstrapStage>) -> Self {
        self.stages = stages;
        self
    }

    pub fn without_bootstrap(self) -> Self {
        self.with_stages(Vec::new())
    }

    pub fn with_exclude(mut self, exclude: Vec<String>) -> Self {
        self.exclude = exclude;
        self
    }
}

/// Main initialization service.
pub struct Initializer {
    filesystem: Box<dyn Filesystem>,
    runner: Box<dyn CommandRunner>,
    options: InitOptions,
}

impl Initializer {
    /// Create an initializer with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use plugkit_core::application::{InitOptions, Initializer};
    ///
    /// let initializer = Initializer::new(
    ///     Box::new(filesystem), // impl Filesystem
    ///     Box::new(runner),     // impl CommandRunner
    ///     InitOptions::new("."),
    /// );
    /// ```
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        runner: Box<dyn CommandRunner>,
        options: InitOptions,
    ) -> Self {
        Self {
            filesystem,
            runner,
            options,
        }
    }

    /// Run the whole pipeline.
    ///
    /// Only a prompter failure aborts with `Err`; every filesystem and
    /// process failure ends up in the report.
    #[instrument(skip_all, fields(root = %self.options.root.display()))]
    pub fn run(
        &self,
        prompter: &dyn Prompter,
        observer: &dyn InitObserver,
    ) -> PlugkitResult<InitOutcome> {
        let mut report = TransformReport::new();
        let mut state = InitState::CollectInput;

        loop {
            debug!(state = %state, "Entering state");
            state = match state {
                InitState::CollectInput => {
                    let raw = prompter.collect()?;
                    validator::validate_identifiers(&raw)?;
                    InitState::Confirm(raw)
                }
                InitState::Confirm(raw) => {
                    let derived = DerivedIdentifiers::derive(&raw);
                    if prompter.confirm(&derived)? {
                        InitState::Rename(derived)
                    } else {
                        InitState::Cancelled
                    }
                }
                InitState::Rename(derived) => {
                    observer.stage_started(Stage::Rename);
                    let results = self.rename(&derived);
                    fold(&mut report, results, observer);
                    InitState::Substitute(derived)
                }
                InitState::Substitute(derived) => {
                    observer.stage_started(Stage::Substitute);
                    let results = self.substitute(&derived);
                    fold(&mut report, results, observer);
                    InitState::Bootstrap(derived)
                }
                InitState::Bootstrap(derived) => {
                    observer.stage_started(Stage::Bootstrap);
                    self.bootstrap(&mut report, observer);
                    InitState::Done(derived)
                }
                InitState::Done(identifiers) => {
                    info!(
                        results = report.len(),
                        failed = report.failure_count(),
                        "Initialization finished"
                    );
                    return Ok(InitOutcome::Completed {
                        identifiers,
                        report,
                    });
                }
                InitState::Cancelled => {
                    warn!("Initialization cancelled before any change");
                    return Ok(InitOutcome::Cancelled);
                }
            };
        }
    }

    /// Rename stage on its own.
    pub fn rename(&self, derived: &DerivedIdentifiers) -> Vec<TransformResult> {
        match FileTransformPlan::for_identifiers(derived) {
            Ok(plan) => FileRenamer::new(self.filesystem.as_ref()).rename(&self.options.root, plan),
            Err(e) => vec![TransformResult::failure(
                Stage::Rename,
                "plan",
                e.to_string(),
            )],
        }
    }

    /// Substitute stage on its own.
    pub fn substitute(&self, derived: &DerivedIdentifiers) -> Vec<TransformResult> {
        TreeWalker::new(self.filesystem.as_ref())
            .excluding(&self.options.exclude)
            .walk_and_substitute(&self.options.root, derived)
    }

    fn bootstrap(&self, report: &mut TransformReport, observer: &dyn InitObserver) {
        let bootstrapper = Bootstrapper::new(self.runner.as_ref());
        for stage in &self.options.stages {
            observer.command_started(&stage.name, &stage.command_line());
            let result = bootstrapper.run_stage(stage, &self.options.root);
            observer.unit_finished(&result);
            report.push(result);
        }
    }
}

fn fold(report: &mut TransformReport, results: Vec<TransformResult>, observer: &dyn InitObserver) {
    for result in results {
        observer.unit_finished(&result);
        report.push(result);
    }
}
