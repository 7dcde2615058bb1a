use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

const SPINDLE_VARS: &[&str] = &[
    "SPINDLE_CONFIG_PATH",
    "SPINDLE_CONFIG_JSON",
    "SPINDLE_SCALE_FACTOR",
    "SPINDLE_MAX_ITEM_SIZE",
    "SPINDLE_DEFAULT_INDEX",
    "SPINDLE_SNAP_STRATEGY",
    "SPINDLE_SNAP_DURATION_MS",
];

/// Command running in an empty directory with no SPINDLE_* leakage.
fn spindlectl(dir: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("spindlectl");
    cmd.current_dir(dir.path()).env("RUST_LOG", "warn");
    for var in SPINDLE_VARS {
        cmd.env_remove(var);
    }
    cmd
}

fn stdout_of(cmd: &mut assert_cmd::Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8_lossy(&output).into_owned()
}

fn json_lines(text: &str) -> Vec<Value> {
    text.lines()
        .map(|line| serde_json::from_str(line).expect("JSON line"))
        .collect()
}

#[test]
fn help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    let text = stdout_of(spindlectl(&dir).arg("--help"));
    for name in ["layout", "check", "simulate"] {
        assert!(text.contains(name), "help missing '{name}'");
    }

    let text = stdout_of(spindlectl(&dir).args(["simulate", "--help"]));
    assert!(text.contains("--release-at"), "simulate help missing --release-at");
}

#[test]
fn layout_prints_geometry_as_json() {
    let dir = TempDir::new().unwrap();
    let text = stdout_of(spindlectl(&dir).args([
        "layout", "--width", "390", "--height", "300", "--items", "5",
    ]));
    let report: Value = serde_json::from_str(&text).unwrap();

    let side = report["item_size"]["width"].as_f64().unwrap();
    assert!((side - 248.0 / 1.3).abs() < 1e-3, "side was {side}");
    assert_eq!(report["current_index"], 0);
    assert_eq!(report["frames"].as_array().unwrap().len(), 5);
    assert_eq!(report["source"], "built-in defaults");

    let inset = report["content"]["inset_left"].as_f64().unwrap();
    let offset = report["initial_offset"].as_f64().unwrap();
    assert!((offset + inset).abs() < 1e-3);
}

#[test]
fn layout_reads_settings_from_working_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("spindle.toml"),
        "[carousel]\ndefault_index = 30\n",
    )
    .unwrap();

    let text = stdout_of(spindlectl(&dir).args([
        "layout", "--width", "390", "--height", "300", "--items", "4",
    ]));
    let report: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(report["current_index"], 3);
}

#[test]
fn check_fails_on_guard_rail_errors() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[carousel]\nscale_factor = 0.5\n").unwrap();

    spindlectl(&dir)
        .arg("check")
        .arg("--config")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("scale_factor"));
}

#[test]
fn check_reports_warnings_from_env_file() {
    let dir = TempDir::new().unwrap();
    let env_file = dir.path().join("carousel.env");
    fs::write(
        &env_file,
        "SPINDLE_SNAP_STRATEGY=tween\nSPINDLE_SNAP_DURATION_MS=0\n",
    )
    .unwrap();

    spindlectl(&dir)
        .arg("check")
        .arg("--env-file")
        .arg(&env_file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Env file: loaded"))
        .stdout(predicate::str::contains("zero duration"))
        .stdout(predicate::str::contains("strategy = \"tween\""));
}

#[test]
fn simulate_snaps_to_the_nearest_item() {
    let dir = TempDir::new().unwrap();
    let text = stdout_of(spindlectl(&dir).args([
        "simulate",
        "--width",
        "390",
        "--height",
        "300",
        "--items",
        "5",
        "--release-at",
        "2.4",
    ]));
    let lines = json_lines(&text);

    assert_eq!(lines[0]["command"], "set_page_count");
    assert_eq!(lines[0]["count"], 5);

    let change = lines
        .iter()
        .find(|line| line["command"] == "index_changed")
        .expect("index change");
    assert_eq!(change["previous"], 0);
    assert_eq!(change["current"], 2);

    assert!(lines.iter().any(|line| {
        line["command"] == "set_scroll_offset" && line["animated"] == true
    }));
}

#[test]
fn simulate_tweened_snap_lands_on_the_target() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("spindle.toml"),
        "[snap]\nstrategy = \"tween\"\nduration_ms = 64\n",
    )
    .unwrap();

    let text = stdout_of(spindlectl(&dir).args([
        "simulate",
        "--width",
        "390",
        "--height",
        "300",
        "--items",
        "5",
        "--release-at",
        "0.7",
    ]));
    let lines = json_lines(&text);

    assert!(lines.iter().all(|line| line["animated"] != true));
    let last_center = lines
        .iter()
        .rev()
        .find(|line| line["command"] == "apply_transform" && line["index"] == 1)
        .expect("transform for the target item");
    let scale = last_center["scale"].as_f64().unwrap();
    assert!((scale - 1.3).abs() < 1e-3, "scale was {scale}");
}
