//! External process adapter using std::process.

use std::io::ErrorKind;
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, instrument};

use plugkit_core::{
    application::{
        ApplicationError,
        ports::{CommandOutput, CommandRunner},
    },
    domain::CommandStep,
    error::PlugkitResult,
};

/// Runs commands directly, without a shell.
///
/// Stdin is closed so a tool waiting for input fails instead of hanging.
/// Stdout is discarded; stderr is captured for the failure reason.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    #[instrument(skip_all, fields(command = %step, cwd = %cwd.display()))]
    fn run(&self, step: &CommandStep, cwd: &Path) -> PlugkitResult<CommandOutput> {
        let output = Command::new(&step.program)
            .args(&step.args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| ApplicationError::ExternalProcess {
                command: step.to_string(),
                reason: match e.kind() {
                    ErrorKind::NotFound => format!("{} is not installed", step.program),
                    _ => e.to_string(),
                },
            })?;

        debug!(status = %output.status, "Command exited");
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        Ok(if output.status.success() {
            CommandOutput {
                stderr,
                ..CommandOutput::ok()
            }
        } else {
            CommandOutput::failed(output.status.code(), stderr)
        })
    }
}
