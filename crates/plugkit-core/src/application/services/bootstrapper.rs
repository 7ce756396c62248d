//! Toolchain Bootstrapper - runs external commands after the transform.
//!
//! Best-effort: every stage is attempted regardless of earlier outcomes.

use std::path::Path;

use tracing::{info, instrument, warn};

use crate::{
    application::ports::{CommandOutput, CommandRunner},
    domain::{BootstrapStage, CommandStep, Stage, TransformResult},
};

pub struct Bootstrapper<'a> {
    runner: &'a dyn CommandRunner,
}

impl<'a> Bootstrapper<'a> {
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        Self { runner }
    }

    /// Run every step of `stage` in `cwd`, stopping at the first failure.
    #[instrument(skip_all, fields(stage = %stage.name))]
    pub fn run_stage(&self, stage: &BootstrapStage, cwd: &Path) -> TransformResult {
        if stage.steps.is_empty() {
            return TransformResult::success(Stage::Bootstrap, &stage.name)
                .with_detail("nothing to run");
        }

        for step in &stage.steps {
            info!(command = %step, "Running");
            let failure = match self.runner.run(step, cwd) {
                Ok(output) if output.success => continue,
                Ok(output) => exit_reason(step, &output),
                Err(e) => format!("`{step}` could not start: {}", e.reason()),
            };
            warn!(reason = %failure, "Stage failed");
            return TransformResult::failure(Stage::Bootstrap, &stage.name, failure);
        }

        info!("Stage finished");
        TransformResult::success(Stage::Bootstrap, &stage.name).with_detail(stage.command_line())
    }
}

fn exit_reason(step: &CommandStep, output: &CommandOutput) -> String {
    let status = match output.code {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_string(),
    };
    match output.stderr.lines().rev().find(|l| !l.trim().is_empty()) {
        Some(line) => format!("`{step}` failed with {status}: {}", line.trim()),
        None => format!("`{step}` failed with {status}"),
    }
}
