//! Scripted command runner for testing.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use plugkit_core::{
    application::{
        ApplicationError,
        ports::{CommandOutput, CommandRunner},
    },
    domain::CommandStep,
    error::PlugkitResult,
};

/// What a scripted program does when run.
#[derive(Debug, Clone)]
enum Script {
    Exit(CommandOutput),
    Missing,
}

/// Replays canned outcomes per program name and records every call.
///
/// Programs without a script succeed.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRunner {
    scripts: HashMap<String, Script>,
    calls: Arc<Mutex<Vec<(String, PathBuf)>>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// `program` exits with `code` and prints `stderr`.
    pub fn fail(mut self, program: &str, code: i32, stderr: &str) -> Self {
        self.scripts.insert(
            program.to_owned(),
            Script::Exit(CommandOutput::failed(Some(code), stderr)),
        );
        self
    }

    /// `program` cannot be launched.
    pub fn missing(mut self, program: &str) -> Self {
        self.scripts.insert(program.to_owned(), Script::Missing);
        self
    }

    /// Every command line run so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.lock().iter().map(|(c, _)| c.clone()).collect()
    }

    /// Working directory of every call, in order.
    pub fn directories(&self) -> Vec<PathBuf> {
        self.lock().iter().map(|(_, d)| d.clone()).collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<(String, PathBuf)>> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, step: &CommandStep, cwd: &Path) -> PlugkitResult<CommandOutput> {
        self.lock().push((step.to_string(), cwd.to_path_buf()));

        match self.scripts.get(&step.program) {
            None => Ok(CommandOutput::ok()),
            Some(Script::Exit(output)) => Ok(output.clone()),
            Some(Script::Missing) => Err(ApplicationError::ExternalProcess {
                command: step.to_string(),
                reason: format!("{} is not installed", step.program),
            }
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_calls_and_replays_scripts() {
        let runner = ScriptedRunner::new().fail("npm", 1, "boom").missing("composer");
        let cwd = Path::new("/p");

        assert!(runner.run(&CommandStep::new("git", ["init"]), cwd).unwrap().success);
        assert!(!runner.run(&CommandStep::new("npm", ["install"]), cwd).unwrap().success);
        assert!(runner.run(&CommandStep::new("composer", ["install"]), cwd).is_err());

        assert_eq!(runner.calls(), ["git init", "npm install", "composer install"]);
        assert!(runner.directories().iter().all(|d| d == cwd));
    }
}
