use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn paintbox_cmd() -> Command {
    Command::cargo_bin("paintbox").expect("binary exists")
}

#[test]
fn paintbox_help_prints_usage() {
    paintbox_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Minimal paint program for Wayland compositors",
        ))
        .stdout(predicate::str::contains("--print-config"));
}

#[test]
fn running_requires_wayland_env() {
    let temp = TempDir::new().unwrap();

    paintbox_cmd()
        .env_remove("WAYLAND_DISPLAY")
        .env("XDG_CONFIG_HOME", temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("WAYLAND_DISPLAY"));
}

#[test]
fn print_config_emits_defaults_without_wayland() {
    let temp = TempDir::new().unwrap();

    paintbox_cmd()
        .env_remove("WAYLAND_DISPLAY")
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--print-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("default_mode = \"free\""))
        .stdout(predicate::str::contains("default_color = \"black\""))
        .stdout(predicate::str::contains("target_fps = 60"));
}

#[test]
fn print_config_reads_config_home() {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join("paintbox");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "[drawing]\ndefault_mode = \"circle\"\ndefault_brush_size = 99.0\n",
    )
    .unwrap();

    paintbox_cmd()
        .env_remove("WAYLAND_DISPLAY")
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--print-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("default_mode = \"circle\""))
        .stdout(predicate::str::contains("default_brush_size = 50.0"));
}

#[test]
fn explicit_config_path_must_exist() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope.toml");

    paintbox_cmd()
        .env_remove("WAYLAND_DISPLAY")
        .arg("--config")
        .arg(&missing)
        .arg("--print-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config"));
}

#[test]
fn broken_default_config_falls_back_to_defaults() {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join("paintbox");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "[drawing\n").unwrap();

    paintbox_cmd()
        .env_remove("WAYLAND_DISPLAY")
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--print-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("default_mode = \"free\""));
}

#[test]
fn schema_dump_describes_config_sections() {
    Command::cargo_bin("dump_config_schema")
        .expect("binary exists")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"drawing\""))
        .stdout(predicate::str::contains("\"keybindings\""));
}
