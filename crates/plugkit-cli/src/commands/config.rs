//! `plugkit config`: inspect the effective configuration.

use serde_json::json;

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::List => {
            output.header("Current configuration")?;
            output.print(&to_toml(&config)?)?;
            if let Some(hint) = walk_exclude_hint(&config) {
                output.info(hint)?;
            }
            output.json(&config)?;
        }

        ConfigCommands::Path => {
            let path = AppConfig::active_path(global.config.as_deref());
            output.print(&path.display().to_string())?;
            output.json(&json!({
                "path": path,
                "exists": path.exists(),
            }))?;
        }
    }

    Ok(())
}

/// Suggest skipping version-control metadata when the walk would enter it.
fn walk_exclude_hint(config: &AppConfig) -> Option<&'static str> {
    if config.walk.exclude.iter().any(|name| name == ".git") {
        return None;
    }
    Some(
        "The walk enters .git; add `exclude = [\".git\"]` under [walk] \
         (or set PLUGKIT_WALK__EXCLUDE=.git) to leave repository metadata alone",
    )
}

fn to_toml(config: &AppConfig) -> CliResult<String> {
    toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_serialises() {
        let text = to_toml(&AppConfig::default()).unwrap();
        assert!(text.contains("[bootstrap]"));
        assert!(text.contains("composer"));
        assert!(text.contains("format = \"auto\""));
    }

    #[test]
    fn git_hint_until_excluded() {
        let mut config = AppConfig::default();
        config.walk.exclude = vec!["vendor".into()];
        assert!(walk_exclude_hint(&config).unwrap().contains("PLUGKIT_WALK__EXCLUDE=.git"));

        config.walk.exclude.push(".git".into());
        assert_eq!(walk_exclude_hint(&config), None);
    }

    #[test]
    fn serialised_config_loads_back() {
        let mut config = AppConfig::default();
        config.defaults.vendor_name = Some("acme".into());
        config.walk.exclude = vec!["node_modules".into()];

        let file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        std::fs::write(file.path(), to_toml(&config).unwrap()).unwrap();
        let loaded = AppConfig::load(Some(&file.path().to_path_buf())).unwrap();

        assert_eq!(loaded.defaults.vendor_name.as_deref(), Some("acme"));
        assert_eq!(loaded.walk.exclude, ["node_modules"]);
        assert_eq!(loaded.bootstrap.stages, config.bootstrap.stages);
    }
}
