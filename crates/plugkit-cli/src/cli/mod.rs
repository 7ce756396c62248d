//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "plugkit",
    bin_name = "plugkit",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Turn a plugin boilerplate into your plugin",
    long_about = "Plugkit renames the boilerplate's template files, replaces every \
                  placeholder in the tree with your plugin's identifiers, and runs \
                  the composer, npm and git bootstrap.",
    after_help = "EXAMPLES:\n\
        \x20 plugkit init\n\
        \x20 plugkit init --name \"Demo Plugin\" --vendor acme --yes\n\
        \x20 plugkit init --path ./my-plugin --dry-run\n\
        \x20 plugkit config list",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Initialize the boilerplate in a directory.
    #[command(
        visible_alias = "i",
        about = "Initialize a plugin from the boilerplate",
        after_help = "EXAMPLES:\n\
            \x20 plugkit init                              # prompt for everything\n\
            \x20 plugkit init --name \"Demo Plugin\" \\\n\
            \x20     --description \"Does demo things\" --vendor acme \\\n\
            \x20     --email dev@acme.test --uri https://acme.test --yes\n\
            \x20 plugkit init --dry-run                    # preview only"
    )]
    Init(InitArgs),

    /// Inspect the Plugkit configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 plugkit config list\n\
            \x20 plugkit config path"
    )]
    Config(ConfigCommands),
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `plugkit init`.
///
/// Every identifier given here is used as-is; the rest are prompted for.
#[derive(Debug, Clone, Default, Args)]
pub struct InitArgs {
    /// Boilerplate root to initialize.
    #[arg(
        short = 'p',
        long = "path",
        value_name = "DIR",
        default_value = ".",
        help = "Boilerplate directory (default: current directory)"
    )]
    pub path: PathBuf,

    #[arg(short = 'n', long = "name", value_name = "NAME", help = "Plugin name")]
    pub name: Option<String>,

    #[arg(
        short = 'd',
        long = "description",
        value_name = "TEXT",
        help = "Plugin description"
    )]
    pub description: Option<String>,

    #[arg(long = "vendor", value_name = "NAME", help = "Vendor name")]
    pub vendor: Option<String>,

    #[arg(long = "email", value_name = "EMAIL", help = "Vendor email")]
    pub email: Option<String>,

    #[arg(long = "uri", value_name = "URI", help = "Vendor URI")]
    pub uri: Option<String>,

    /// PHP namespace. Defaults to `Vendor\PluginName`.
    #[arg(long = "namespace", value_name = "NS", help = "PHP namespace")]
    pub namespace: Option<String>,

    /// Text domain. Defaults to the plugin name slug.
    #[arg(
        long = "textdomain",
        value_name = "DOMAIN",
        help = "Translation text domain"
    )]
    pub text_domain: Option<String>,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and initialize immediately"
    )]
    pub yes: bool,

    /// Preview the derived values and renames without touching anything.
    #[arg(long = "dry-run", help = "Show what would change without changing it")]
    pub dry_run: bool,

    #[arg(
        long = "skip-bootstrap",
        help = "Do not run composer, npm or git afterwards"
    )]
    pub skip_bootstrap: bool,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `plugkit config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML.
    List,
    /// Print the path of the configuration file in use.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_init_with_identifiers() {
        let cli = Cli::parse_from([
            "plugkit",
            "init",
            "--name",
            "Demo Plugin",
            "--vendor",
            "acme",
            "--textdomain",
            "demo",
            "-y",
        ]);
        let Commands::Init(args) = cli.command else {
            panic!("expected Init command");
        };
        assert_eq!(args.name.as_deref(), Some("Demo Plugin"));
        assert_eq!(args.vendor.as_deref(), Some("acme"));
        assert_eq!(args.text_domain.as_deref(), Some("demo"));
        assert!(args.yes);
        assert_eq!(args.path, PathBuf::from("."));
    }

    #[test]
    fn init_alias() {
        let cli = Cli::parse_from(["plugkit", "i", "--dry-run"]);
        assert!(matches!(cli.command, Commands::Init(InitArgs { dry_run: true, .. })));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["plugkit", "init", "-vv", "--output-format", "json"]);
        assert_eq!(cli.global.verbose, 2);
        assert_eq!(cli.global.output_format, OutputFormat::Json);
    }

    #[test]
    fn config_subcommands() {
        let cli = Cli::parse_from(["plugkit", "config", "path"]);
        assert!(matches!(cli.command, Commands::Config(ConfigCommands::Path)));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["plugkit", "--quiet", "--verbose", "init"]);
        assert!(result.is_err());
    }
}
