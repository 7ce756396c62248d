//! Live progress for a running initialization.

use std::cell::RefCell;
use std::io::IsTerminal as _;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use plugkit_core::{
    application::ports::InitObserver,
    domain::{Stage, TransformResult},
};

use crate::output::OutputManager;

/// Announces each stage and spins while a bootstrap command runs.
pub struct ProgressObserver<'a> {
    output: &'a OutputManager,
    spinner: RefCell<Option<ProgressBar>>,
    visible: bool,
}

impl<'a> ProgressObserver<'a> {
    pub fn new(output: &'a OutputManager) -> Self {
        Self {
            output,
            spinner: RefCell::new(None),
            visible: !output.is_quiet() && !output.is_json() && std::io::stderr().is_terminal(),
        }
    }

    fn spinner(&self) -> ProgressBar {
        if !self.visible {
            return ProgressBar::hidden();
        }
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.green} {msg}") {
            bar.set_style(style);
        }
        bar.enable_steady_tick(Duration::from_millis(100));
        bar
    }

    fn clear(&self) {
        if let Some(bar) = self.spinner.borrow_mut().take() {
            bar.finish_and_clear();
        }
    }
}

impl InitObserver for ProgressObserver<'_> {
    fn stage_started(&self, stage: Stage) {
        let message = match stage {
            Stage::Rename => "Renaming template files",
            Stage::Substitute => "Replacing placeholders",
            Stage::Bootstrap => "Bootstrapping toolchain",
        };
        if let Err(e) = self.output.info(message) {
            debug!(error = %e, "Could not write progress line");
        }
    }

    fn command_started(&self, name: &str, command_line: &str) {
        self.clear();
        let bar = self.spinner();
        bar.set_message(format!("{name}: {command_line}"));
        *self.spinner.borrow_mut() = Some(bar);
    }

    fn unit_finished(&self, result: &TransformResult) {
        if result.stage == Stage::Bootstrap {
            self.clear();
        }
    }
}

impl Drop for ProgressObserver<'_> {
    fn drop(&mut self) {
        self.clear();
    }
}
