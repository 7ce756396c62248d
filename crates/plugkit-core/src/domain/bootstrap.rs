//! External toolchain stages run after the tree transform.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One external command: a program and its arguments, run without a shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandStep {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl CommandStep {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for CommandStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " \"{arg}\"")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

/// A named sequence of steps. Steps chain like `&&`: the first failing step
/// ends the stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BootstrapStage {
    pub name: String,
    pub steps: Vec<CommandStep>,
}

impl BootstrapStage {
    pub fn new(name: impl Into<String>, steps: Vec<CommandStep>) -> Self {
        Self {
            name: name.into(),
            steps,
        }
    }

    /// Dependency install, front-end build, then version control.
    pub fn defaults() -> Vec<BootstrapStage> {
        vec![
            Self::new(
                "composer",
                vec![
                    CommandStep::new("composer", ["install"]),
                    CommandStep::new("composer", ["dump-autoload"]),
                ],
            ),
            Self::new(
                "npm",
                vec![
                    CommandStep::new("npm", ["install"]),
                    CommandStep::new("npm", ["run", "build"]),
                ],
            ),
            Self::new(
                "git",
                vec![
                    CommandStep::new("git", ["init"]),
                    CommandStep::new("git", ["add", "."]),
                    CommandStep::new("git", ["commit", "-m", "Initial commit"]),
                ],
            ),
        ]
    }

    /// The stage as a single shell-like line, for display.
    pub fn command_line(&self) -> String {
        self.steps
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" && ")
    }
}

impl fmt::Display for BootstrapStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_run_in_fixed_order() {
        let names: Vec<_> = BootstrapStage::defaults()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, ["composer", "npm", "git"]);
    }

    #[test]
    fn command_line_quotes_spaced_args() {
        let git = BootstrapStage::defaults().remove(2);
        assert_eq!(
            git.command_line(),
            "git init && git add . && git commit -m \"Initial commit\""
        );
    }

    #[test]
    fn step_deserializes_without_args() {
        let step: CommandStep = serde_json::from_str(r#"{"program":"make"}"#).unwrap();
        assert_eq!(step, CommandStep::new("make", Vec::<String>::new()));
    }
}
