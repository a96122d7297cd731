use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const CATALOG: &str = r#"{
    "stock": {
        "_id": "stock",
        "_name": "Buffer tube stock",
        "_parent": "55818a594bdc2db9688b456a",
        "_props": { "Ergonomics": -20, "Recoil": 30 }
    },
    "grip": {
        "_id": "grip",
        "_name": "Vertical grip",
        "_parent": "55818af64bdc2d5b648b4570",
        "_props": { "Ergonomics": 45, "Recoil": -2 }
    }
}"#;

const CONFIG: &str = r#"{
    // stocks get lighter
    "StockErgonomics": { "Multiplier": 2.0 },
    "StockRecoil": { "Multiplier": 1.1 },
    "SpecificAttachmentOverrides": [
        { "ItemId": "grip", "Name": "Custom grip", "ErgonomicsOverride": 60 }
    ]
}"#;

fn tuner(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_attachment-tuner"))
        .args(args)
        .env_remove("TUNER_DATA_DIR")
        .env("RUST_LOG", "info")
        .env("NO_COLOR", "1")
        .output()
        .expect("binary should run")
}

fn data_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("items.json"), CATALOG).unwrap();
    fs::write(dir.path().join("config.jsonc"), CONFIG).unwrap();
    dir
}

fn path_arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn apply_prints_text_summary_and_logs_overrides() {
    let dir = data_dir();
    let output = tuner(&["apply", "--data-dir", path_arg(dir.path())]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stdout.contains("Stats changed for 2 attachments"), "{stdout}");
    assert!(stderr.contains("Overriding Custom grip ergonomics to 60"), "{stderr}");
    assert!(stderr.contains("stats changed for 2 attachments"), "{stderr}");
}

#[test]
fn apply_json_summary() {
    let dir = data_dir();
    let output = tuner(&["apply", "--data-dir", path_arg(dir.path()), "--format", "json"]);

    assert!(output.status.success());
    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["modified_count"], 2);
    assert_eq!(summary["visited"], 2);
    assert_eq!(summary["overrides"][0]["name"], "Custom grip");
}

#[test]
fn apply_leaves_catalog_file_untouched() {
    let dir = data_dir();
    let output = tuner(&["apply", "--data-dir", path_arg(dir.path())]);

    assert!(output.status.success());
    assert_eq!(fs::read_to_string(dir.path().join("items.json")).unwrap(), CATALOG);
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 2);
}

#[test]
fn apply_has_no_output_flag() {
    let dir = data_dir();
    let target = dir.path().join("adjusted.json");
    let output = tuner(&[
        "apply",
        "--data-dir",
        path_arg(dir.path()),
        "--output",
        path_arg(&target),
    ]);

    assert!(!output.status.success());
    assert!(!target.exists());
}

#[test]
fn show_config_reports_detected_schema() {
    let dir = data_dir();
    let legacy = dir.path().join("legacy.toml");
    fs::write(&legacy, "StockRecoilMultiplier = 0.5\n").unwrap();

    let output = tuner(&["show-config", "--config", path_arg(&legacy)]);

    assert!(output.status.success());
    let shown: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(shown["config"]["schema"], "Legacy");
    assert_eq!(shown["config"]["override_mode"], "Stacked");
    assert_eq!(shown["config"]["rules"]["StockRecoil"]["multiplier"], 0.5);
}

#[test]
fn missing_configuration_fails_with_error_code() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("items.json"), CATALOG).unwrap();

    let output = tuner(&["apply", "--data-dir", path_arg(dir.path())]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("SOURCE_CONFIG_UNAVAILABLE"), "{stderr}");
}

#[test]
fn version_flag_prints_package_version() {
    let output = tuner(&["--version"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains(env!("CARGO_PKG_VERSION")));
}
