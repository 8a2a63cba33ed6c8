use std::fs;
use std::path::PathBuf;

use dayboard_core::config::loader::ConfigLoader;
use tempfile::tempdir;

fn write_file(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn load_default_profile_ok() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    let toml = r#"
version = 1
profile = "default"

[profiles.default]
data_dir = "/tmp/dayboard"

[logging]
level = "debug"

[journal]
enabled = true
retention_days = 30
"#;

    write_file(&cfg_path, toml);

    let rc = ConfigLoader::load(Some(&cfg_path), None).expect("should load");
    assert_eq!(rc.active_profile, "default");
    assert_eq!(rc.data_dir.display().to_string(), "/tmp/dayboard");
    assert_eq!(rc.logging.level, "debug");
    assert!(rc.journal.enabled);
    assert_eq!(rc.journal.retention_days, 30);
}

#[test]
fn load_with_profile_override_ok() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("dayboard/config.toml");
    let toml = r#"
version = 1
profile = "default"

[profiles.default]
data_dir = "/tmp/def"

[profiles.work]
data_dir = "/tmp/work"
"#;
    write_file(&cfg_path, toml);

    let rc = ConfigLoader::load(Some(&cfg_path), Some("work")).expect("should load");
    assert_eq!(rc.active_profile, "work");
    assert_eq!(rc.data_dir.display().to_string(), "/tmp/work");
}

#[test]
fn defaults_apply_when_sections_missing() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    let toml = r#"
version = 1

[profiles.default]
data_dir = "/tmp/dayboard"
"#;
    write_file(&cfg_path, toml);

    let rc = ConfigLoader::load(Some(&cfg_path), None).expect("should load");
    assert_eq!(rc.logging.level, "info");
    assert!(rc.journal.enabled);
    assert_eq!(rc.journal.retention_days, 90);
    assert!(rc.journal.log_operations.is_empty());
}

#[test]
fn log_file_substitutes_data_dir() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    let toml = r#"
version = 1

[profiles.default]
data_dir = "/tmp/dayboard"

[logging]
level = "info"
file = "{{data_dir}}/dbd.log"
"#;
    write_file(&cfg_path, toml);

    let rc = ConfigLoader::load(Some(&cfg_path), None).expect("should load");
    assert_eq!(
        rc.logging.file.unwrap().display().to_string(),
        "/tmp/dayboard/dbd.log"
    );
}
