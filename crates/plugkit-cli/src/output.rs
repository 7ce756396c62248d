//! Output management and formatting.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use plugkit_core::domain::{
    DerivedIdentifiers, FileTransformPlan, Stage, TransformReport, TransformResult,
};

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
///
/// In JSON mode every human-oriented line is dropped and only [`Self::json`]
/// writes to stdout.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let requested = match args.output_format {
            OutputFormat::Auto => OutputFormat::from_config(&config.output.format),
            explicit => explicit,
        };
        let resolved_format = requested.resolve(io::stdout().is_terminal());

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.silent() {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.marked("\u{2713}", msg, |s| s.green().bold().to_string())
    }

    /// Failure indicator: `✗ <msg>`. Shown even in quiet mode.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        if self.is_json() {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2717} {msg}")
        } else {
            format!("{} {}", "\u{2717}".red().bold(), msg.red())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.marked("\u{26a0}", msg, |s| s.yellow().bold().to_string())
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.marked("\u{2139}", msg, |s| s.blue().bold().to_string())
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.silent() {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Pretty JSON document on stdout. Only written in JSON mode.
    pub fn json<T: Serialize>(&self, value: &T) -> io::Result<()> {
        if !self.is_json() {
            return Ok(());
        }
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&text)
    }

    // ── Domain views ──────────────────────────────────────────────────────

    /// The derived values the user is asked to confirm.
    pub fn preview(&self, derived: &DerivedIdentifiers) -> io::Result<()> {
        self.header("Plugin details")?;
        let rows = derived.preview();
        let width = rows.iter().map(|(f, _)| f.label().len()).max().unwrap_or(0);
        for (field, value) in rows {
            self.print(&format!("  {:<width$}  {value}", field.label()))?;
        }
        self.print("")
    }

    /// The renames a run would perform.
    pub fn plan(&self, plan: &FileTransformPlan) -> io::Result<()> {
        self.header("Files to rename")?;
        for op in plan {
            if op.is_identity() {
                self.print(&format!("  {} (already named)", op.source))?;
            } else {
                self.print(&format!("  {op}"))?;
            }
        }
        self.print("")
    }

    /// Per-stage results followed by a one-line verdict.
    pub fn report(&self, report: &TransformReport) -> io::Result<()> {
        for stage in Stage::ALL {
            let results: Vec<&TransformResult> = report.stage(stage).collect();
            if results.is_empty() {
                continue;
            }
            self.header(stage_title(stage))?;

            if stage == Stage::Substitute {
                // One line per file is noise; only failures are listed.
                let ok = results.iter().filter(|r| r.succeeded).count();
                self.success(&format!("{ok} of {} files processed", results.len()))?;
                for result in results.iter().filter(|r| !r.succeeded) {
                    self.error(&result_line(result))?;
                }
            } else {
                for result in results {
                    if result.succeeded {
                        self.success(&result_line(result))?;
                    } else {
                        self.error(&result_line(result))?;
                    }
                }
            }
            self.print("")?;
        }

        if report.is_clean() {
            self.success("Plugin initialized")
        } else {
            self.warning(&format!(
                "Finished with {} failed of {} steps",
                report.failure_count(),
                report.len()
            ))
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// `true` if quiet mode suppresses most output.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    pub fn is_json(&self) -> bool {
        self.resolved_format == OutputFormat::Json
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }

    fn silent(&self) -> bool {
        self.quiet || self.is_json()
    }

    fn marked(&self, mark: &str, msg: &str, paint: impl Fn(&str) -> String) -> io::Result<()> {
        if self.silent() {
            return Ok(());
        }
        let line = if self.no_color {
            format!("{mark} {msg}")
        } else {
            format!("{} {msg}", paint(mark))
        };
        self.term.write_line(&line)
    }
}

fn stage_title(stage: Stage) -> &'static str {
    match stage {
        Stage::Rename => "Renamed files",
        Stage::Substitute => "Replaced placeholders",
        Stage::Bootstrap => "Bootstrap",
    }
}

fn result_line(result: &TransformResult) -> String {
    match &result.detail {
        Some(detail) if result.succeeded => format!("{} ({detail})", result.subject),
        Some(detail) => format!("{}: {detail}", result.subject),
        None => result.subject.clone(),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
