//! Terminal implementation of the `Prompter` port.
//!
//! Values come from, in order: command-line flags, an interactive prompt
//! (feature `interactive`, terminal required), then configured or computed
//! suggestions. A field with none of these is an `InputMissing` error.

use std::collections::HashMap;
use std::io::IsTerminal as _;

use tracing::debug;

use plugkit_core::{
    application::{ApplicationError, ports::Prompter},
    domain::{DerivedIdentifiers, IdentifierField, RawIdentifiers},
    error::PlugkitResult,
};

use crate::{cli::InitArgs, config::AppConfig, output::OutputManager};

pub struct TerminalPrompter<'a> {
    /// Values given as flags; never prompted for.
    given: HashMap<IdentifierField, String>,
    /// Configured suggestions for the vendor fields.
    configured: HashMap<IdentifierField, String>,
    output: &'a OutputManager,
    assume_yes: bool,
    interactive: bool,
}

impl<'a> TerminalPrompter<'a> {
    pub fn new(args: &InitArgs, config: &AppConfig, output: &'a OutputManager) -> Self {
        let given = [
            (IdentifierField::PluginName, &args.name),
            (IdentifierField::PluginDescription, &args.description),
            (IdentifierField::VendorName, &args.vendor),
            (IdentifierField::VendorEmail, &args.email),
            (IdentifierField::VendorUri, &args.uri),
            (IdentifierField::Namespace, &args.namespace),
            (IdentifierField::TextDomain, &args.text_domain),
        ];
        let configured = [
            (IdentifierField::VendorName, &config.defaults.vendor_name),
            (IdentifierField::VendorEmail, &config.defaults.vendor_email),
            (IdentifierField::VendorUri, &config.defaults.vendor_uri),
        ];

        Self {
            given: collect_present(given),
            configured: collect_present(configured),
            output,
            assume_yes: args.yes,
            interactive: cfg!(feature = "interactive")
                && std::io::stdin().is_terminal()
                && std::io::stderr().is_terminal(),
        }
    }

    /// Force prompting on or off, regardless of the terminal.
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    /// Whether `collect` will ask at least one question.
    fn will_prompt(&self) -> bool {
        self.interactive
            && IdentifierField::ALL
                .iter()
                .any(|field| !self.given.contains_key(field))
    }

    /// What to offer for `field` given the answers so far.
    fn suggestion(
        &self,
        field: IdentifierField,
        answers: &HashMap<IdentifierField, String>,
    ) -> Option<String> {
        let answer = |f: IdentifierField| answers.get(&f).map(String::as_str);
        match field {
            IdentifierField::Namespace => Some(RawIdentifiers::default_namespace(
                answer(IdentifierField::VendorName)?,
                answer(IdentifierField::PluginName)?,
            )),
            IdentifierField::TextDomain => Some(RawIdentifiers::default_text_domain(answer(
                IdentifierField::PluginName,
            )?)),
            other => self.configured.get(&other).cloned(),
        }
    }

    fn resolve(
        &self,
        field: IdentifierField,
        answers: &HashMap<IdentifierField, String>,
    ) -> PlugkitResult<String> {
        if let Some(value) = self.given.get(&field) {
            return Ok(value.clone());
        }

        let suggestion = self.suggestion(field, answers);
        if self.interactive {
            return ask(field, suggestion);
        }

        suggestion.ok_or_else(|| {
            ApplicationError::InputMissing {
                field: field.as_str(),
            }
            .into()
        })
    }
}

impl Prompter for TerminalPrompter<'_> {
    fn collect(&self) -> PlugkitResult<RawIdentifiers> {
        let mut answers = HashMap::new();
        let mut builder = RawIdentifiers::builder();

        if self.will_prompt() {
            self.output
                .warning("Beware: the case you are asked for is important!")
                .map_err(|e| ApplicationError::PromptFailed {
                    reason: e.to_string(),
                })?;
        }

        for field in IdentifierField::ALL {
            let value = self.resolve(field, &answers)?;
            debug!(field = %field, "Collected");
            builder = builder.set(field, value.clone());
            answers.insert(field, value);
        }

        Ok(builder.build()?)
    }

    fn confirm(&self, derived: &DerivedIdentifiers) -> PlugkitResult<bool> {
        self.output
            .preview(derived)
            .map_err(|e| ApplicationError::PromptFailed {
                reason: e.to_string(),
            })?;

        if self.assume_yes {
            return Ok(true);
        }
        if !self.interactive {
            return Err(ApplicationError::PromptFailed {
                reason: "cannot ask for confirmation without a terminal; pass --yes".into(),
            }
            .into());
        }
        ask_confirmation()
    }
}

/// Question text with the example value that shows the expected casing.
fn question(field: IdentifierField) -> String {
    format!("{} ({})", field.prompt(), field.hint())
}

fn collect_present<const N: usize>(
    pairs: [(IdentifierField, &Option<String>); N],
) -> HashMap<IdentifierField, String> {
    pairs
        .into_iter()
        .filter_map(|(field, value)| value.clone().map(|v| (field, v)))
        .collect()
}

#[cfg(feature = "interactive")]
fn ask(field: IdentifierField, suggestion: Option<String>) -> PlugkitResult<String> {
    use dialoguer::{Input, theme::ColorfulTheme};
    use plugkit_core::domain::casing::slug;

    let theme = ColorfulTheme::default();
    let mut input = Input::<String>::with_theme(&theme).with_prompt(question(field));
    if let Some(suggestion) = suggestion {
        input = input.default(suggestion);
    }
    if matches!(
        field,
        IdentifierField::PluginName | IdentifierField::TextDomain
    ) {
        input = input.validate_with(|value: &String| -> Result<(), &str> {
            if slug(value).is_empty() {
                Err("needs at least one latin letter or digit")
            } else {
                Ok(())
            }
        });
    }

    input.interact_text().map_err(|e| {
        ApplicationError::PromptFailed {
            reason: e.to_string(),
        }
        .into()
    })
}

#[cfg(not(feature = "interactive"))]
fn ask(field: IdentifierField, _suggestion: Option<String>) -> PlugkitResult<String> {
    Err(ApplicationError::InputMissing {
        field: field.as_str(),
    }
    .into())
}

#[cfg(feature = "interactive")]
fn ask_confirmation() -> PlugkitResult<bool> {
    use dialoguer::{Confirm, theme::ColorfulTheme};

    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Proceed with these values?")
        .default(true)
        .interact()
        .map_err(|e| {
            ApplicationError::PromptFailed {
                reason: e.to_string(),
            }
            .into()
        })
}

#[cfg(not(feature = "interactive"))]
fn ask_confirmation() -> PlugkitResult<bool> {
    Err(ApplicationError::PromptFailed {
        reason: "built without the interactive feature; pass --yes".into(),
    }
    .into())
}
