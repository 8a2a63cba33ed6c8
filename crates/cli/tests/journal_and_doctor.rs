//! Integration tests for `dbd journal` and `dbd doctor`.

use std::fs;
use std::io::Write;
use std::process::Command;

use tempfile::tempdir;

fn dbd_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_dbd"))
}

fn create_test_config(data_dir: &std::path::Path, config_path: &std::path::Path) {
    let config_content = format!(
        r#"
version = 1
profile = "test"

[profiles.test]
data_dir = "{}"
"#,
        data_dir.display()
    );

    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    let mut file = fs::File::create(config_path).unwrap();
    file.write_all(config_content.as_bytes()).unwrap();
}

#[test]
fn test_journal_empty() {
    let tmp = tempdir().unwrap();
    let data_dir = tmp.path().join("data");
    let config = tmp.path().join("config.toml");
    create_test_config(&data_dir, &config);

    let output = dbd_cmd()
        .args(["--config", config.to_str().unwrap(), "journal"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No journal entries"));
}

#[test]
fn test_journal_disabled() {
    let tmp = tempdir().unwrap();
    let data_dir = tmp.path().join("data");
    let config = tmp.path().join("config.toml");
    let config_content = format!(
        r#"
version = 1
profile = "test"

[profiles.test]
data_dir = "{}"

[journal]
enabled = false
"#,
        data_dir.display()
    );
    fs::create_dir_all(config.parent().unwrap()).unwrap();
    fs::write(&config, config_content).unwrap();

    let output = dbd_cmd()
        .args(["--config", config.to_str().unwrap(), "journal"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Journalling is disabled"));
}

#[test]
fn test_journal_shows_entries() {
    let tmp = tempdir().unwrap();
    let data_dir = tmp.path().join("data");
    let config = tmp.path().join("config.toml");
    create_test_config(&data_dir, &config);

    // An empty review still journals nothing; write an entry by hand the
    // way the service would.
    fs::create_dir_all(&data_dir).unwrap();
    let entry = format!(
        r#"{{"ts":"{}","op":"complete","id":"TSK-001"}}"#,
        chrono::Utc::now().to_rfc3339()
    );
    fs::write(data_dir.join("journal.jsonl"), format!("{entry}\n")).unwrap();

    let output = dbd_cmd()
        .args(["--config", config.to_str().unwrap(), "journal"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("complete"));
    assert!(stdout.contains("TSK-001"));
}

#[test]
fn test_doctor_ok() {
    let tmp = tempdir().unwrap();
    let data_dir = tmp.path().join("data");
    let config = tmp.path().join("config.toml");
    create_test_config(&data_dir, &config);

    let output = dbd_cmd()
        .args(["--config", config.to_str().unwrap(), "doctor"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("OK   dbd doctor"));
    assert!(stdout.contains("profile: test"));
    assert!(stdout.contains("tasks.db"));
}

#[test]
fn test_doctor_missing_config_fails() {
    let tmp = tempdir().unwrap();
    let missing = tmp.path().join("nope.toml");

    let output = dbd_cmd()
        .args(["--config", missing.to_str().unwrap(), "doctor"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("FAIL dbd doctor"));
}
