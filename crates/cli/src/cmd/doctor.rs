//! Doctor command: validate configuration and print resolved paths.

use std::path::Path;

use dayboard_core::config::loader::{ConfigLoader, default_config_path};

/// Run the doctor command.
pub fn run(config_path: Option<&Path>, profile: Option<&str>) {
    match ConfigLoader::load(config_path, profile) {
        Ok(rc) => {
            println!("OK   dbd doctor");
            println!(
                "path: {}",
                config_path.map_or_else(
                    || default_config_path().display().to_string(),
                    |p| p.display().to_string()
                )
            );
            println!("profile: {}", rc.active_profile);
            println!("data_dir: {}", rc.data_dir.display());
            println!("tasks_db: {}", rc.data_dir.join("tasks.db").display());
            println!("state_file: {}", rc.data_dir.join("state.json").display());
            println!("journal.enabled: {}", rc.journal.enabled);
            println!("journal.retention_days: {}", rc.journal.retention_days);
            println!("logging.level: {}", rc.logging.level);
        }
        Err(e) => {
            println!("FAIL dbd doctor");
            println!("{e}");
            if config_path.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}
