use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    pub profile: Option<String>,
    pub profiles: HashMap<String, Profile>,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub journal: JournalConfig,
}

#[derive(Debug, Deserialize)]
pub struct Profile {
    /// Directory holding the dashboard state for this profile:
    /// `state.json`, `tasks.db` and the session journal.
    pub data_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Configuration for the session journal.
#[derive(Debug, Deserialize, Clone)]
pub struct JournalConfig {
    /// Whether journalling is enabled (default: true)
    #[serde(default = "default_journal_enabled")]
    pub enabled: bool,
    /// Number of days to retain entries before rotation (default: 90)
    #[serde(default = "default_retention_days")]
    pub retention_days: u32,
    /// Which operations to journal (empty = all operations)
    #[serde(default)]
    pub log_operations: Vec<String>,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            enabled: default_journal_enabled(),
            retention_days: default_retention_days(),
            log_operations: Vec::new(),
        }
    }
}

fn default_journal_enabled() -> bool {
    true
}

fn default_retention_days() -> u32 {
    90
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub active_profile: String,
    pub data_dir: PathBuf,
    pub logging: LoggingConfig,
    pub journal: JournalConfig,
}
