//! Binary-level tests for `plugkit`.
//!
//! Every run points `--config` at an empty file in a temp dir so the
//! developer's own configuration never leaks in.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

const IDENTIFIERS: [&str; 10] = [
    "--name",
    "Demo Plugin",
    "--description",
    "Does demo things",
    "--vendor",
    "acme",
    "--email",
    "dev@acme.test",
    "--uri",
    "https://acme.test",
];

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("plugkit.toml"), "").unwrap();
        let ws = Self { dir };
        ws.write("plugin/plugin-name.php", "<?php\n/* Plugin Name: __Plugin_Name__ */\nnamespace __Vendor__\\__PluginName__;\n");
        ws.write("plugin/config/plugin-name.php", "<?php return ['domain' => '__plugin-name__'];\n");
        ws.write("plugin/app/Commands/PluginNameCommand.php", "<?php class __PluginName__Command {}\n");
        ws.write("plugin/composer.json", "{\"name\": \"__vendor__/__plugin-name__\"}\n");
        ws
    }

    fn write(&self, rel: &str, contents: &str) {
        let path = self.dir.path().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    fn plugin(&self) -> PathBuf {
        self.dir.path().join("plugin")
    }

    fn config(&self) -> PathBuf {
        self.dir.path().join("plugkit.toml")
    }

    fn cmd(&self) -> Command {
        let mut cmd = cargo::cargo_bin_cmd!("plugkit");
        cmd.current_dir(self.dir.path())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .arg("--config")
            .arg(self.config());
        cmd
    }

    fn init(&self) -> Command {
        let mut cmd = self.cmd();
        cmd.arg("init").arg("--path").arg(self.plugin());
        cmd
    }
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn help_lists_subcommands() {
    cargo::cargo_bin_cmd!("plugkit")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn version_flag() {
    cargo::cargo_bin_cmd!("plugkit")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn full_init_renames_and_substitutes() {
    let ws = Workspace::new();

    ws.init()
        .args(IDENTIFIERS)
        .args(["--yes", "--skip-bootstrap"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Plugin initialized"));

    let plugin = ws.plugin();
    assert!(!plugin.join("plugin-name.php").exists());
    assert_eq!(
        read(&plugin.join("demo-plugin.php")),
        "<?php\n/* Plugin Name: Demo Plugin */\nnamespace Acme\\DemoPlugin;\n"
    );
    assert_eq!(
        read(&plugin.join("config/demo-plugin.php")),
        "<?php return ['domain' => 'demo-plugin'];\n"
    );
    assert_eq!(
        read(&plugin.join("app/Commands/DemoPluginCommand.php")),
        "<?php class DemoPluginCommand {}\n"
    );
    assert_eq!(
        read(&plugin.join("composer.json")),
        "{\"name\": \"acme/demo-plugin\"}\n"
    );
}

#[test]
fn missing_field_without_terminal_exits_two() {
    let ws = Workspace::new();

    ws.init()
        .args(["--name", "Demo Plugin", "--yes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("plugin description"));

    assert!(ws.plugin().join("plugin-name.php").exists());
}

#[test]
fn confirmation_without_terminal_needs_yes() {
    let ws = Workspace::new();

    ws.init()
        .args(IDENTIFIERS)
        .arg("--skip-bootstrap")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--yes"));

    assert!(ws.plugin().join("plugin-name.php").exists());
}

#[test]
fn dry_run_changes_nothing() {
    let ws = Workspace::new();

    ws.init()
        .args(IDENTIFIERS)
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("demo-plugin.php"))
        .stdout(predicate::str::contains("DemoPluginCommand.php"))
        .stdout(predicate::str::contains("composer install"))
        .stdout(predicate::str::contains("nothing was changed"));

    assert!(ws.plugin().join("plugin-name.php").exists());
    assert!(read(&ws.plugin().join("composer.json")).contains("__vendor__"));
}

#[test]
fn missing_template_file_is_reported_and_exits_one() {
    let ws = Workspace::new();
    fs::remove_file(ws.plugin().join("plugin-name.php")).unwrap();

    ws.init()
        .args(IDENTIFIERS)
        .args(["--yes", "--skip-bootstrap"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("source does not exist"))
        .stderr(predicate::str::contains("Initialization incomplete: 1 of"));

    // The other renames and the substitution still happened.
    assert!(ws.plugin().join("config/demo-plugin.php").exists());
    assert_eq!(
        read(&ws.plugin().join("composer.json")),
        "{\"name\": \"acme/demo-plugin\"}\n"
    );
}

#[test]
fn json_output_is_a_single_document() {
    let ws = Workspace::new();

    let out = ws
        .init()
        .args(IDENTIFIERS)
        .args(["--yes", "--skip-bootstrap", "--output-format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let doc: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(doc["clean"], true);
    assert_eq!(doc["identifiers"]["text_domain"], "demo-plugin");
    assert!(doc["report"]["results"].as_array().is_some_and(|r| r.len() >= 3));
}

#[test]
fn config_path_prints_explicit_file() {
    let ws = Workspace::new();

    ws.cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("plugkit.toml"));
}

#[test]
fn config_list_shows_default_stages() {
    let ws = Workspace::new();

    ws.cmd()
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("composer"))
        .stdout(predicate::str::contains("dump-autoload"));
}

#[test]
fn config_list_suggests_excluding_git() {
    let ws = Workspace::new();

    ws.cmd()
        .env_remove("PLUGKIT_WALK__EXCLUDE")
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PLUGKIT_WALK__EXCLUDE=.git"));

    fs::write(ws.config(), "[walk]\nexclude = [\".git\"]\n").unwrap();
    ws.cmd()
        .env_remove("PLUGKIT_WALK__EXCLUDE")
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PLUGKIT_WALK__EXCLUDE").not());
}

#[test]
fn bad_path_exits_two() {
    let ws = Workspace::new();

    ws.cmd()
        .args(["init", "--path", "does-not-exist", "--yes"])
        .args(IDENTIFIERS)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Not a boilerplate directory"));
}

#[test]
fn missing_config_file_exits_four() {
    cargo::cargo_bin_cmd!("plugkit")
        .env("NO_COLOR", "1")
        .args(["--config", "/definitely/not/here/plugkit.toml", "config", "list"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn configured_vendor_fills_missing_flag() {
    let ws = Workspace::new();
    fs::write(ws.config(), "[defaults]\nvendor_name = \"Configured\"\n").unwrap();

    ws.init()
        .args(["--name", "Demo Plugin", "--description", "d"])
        .args(["--email", "e@x.test", "--uri", "https://x.test"])
        .args(["--yes", "--skip-bootstrap"])
        .assert()
        .success();

    assert!(read(&ws.plugin().join("demo-plugin.php")).contains("namespace Configured\\DemoPlugin;"));
}

#[cfg(unix)]
#[test]
fn failing_bootstrap_stage_exits_one_after_running_later_stages() {
    let ws = Workspace::new();
    fs::write(
        ws.config(),
        r#"
[[bootstrap.stages]]
name = "broken"
steps = [{ program = "false" }]

[[bootstrap.stages]]
name = "marker"
steps = [{ program = "touch", args = ["bootstrapped"] }]
"#,
    )
    .unwrap();

    ws.init()
        .args(IDENTIFIERS)
        .arg("--yes")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("broken"))
        .stderr(predicate::str::contains("Initialization incomplete: 1 of"));

    assert!(ws.plugin().join("bootstrapped").exists());
}
