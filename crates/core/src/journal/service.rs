//! Session journal service implementation.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::autofocus::{SessionStats, Source};
use crate::config::types::{JournalConfig, ResolvedConfig};

use super::types::{JournalEntry, Operation};

/// Error type for journalling.
#[derive(Debug, Error)]
pub enum JournalError {
    #[error("Failed to write journal: {0}")]
    WriteError(#[from] std::io::Error),

    #[error("Failed to serialize entry: {0}")]
    SerializeError(#[from] serde_json::Error),
}

type Result<T> = std::result::Result<T, JournalError>;

/// Service for appending session operations to a JSONL file.
pub struct JournalService {
    /// Path to the journal file
    log_path: PathBuf,

    /// Path to the rotation archive directory
    archive_dir: PathBuf,

    /// Configuration
    config: JournalConfig,
}

impl JournalService {
    const LOG_FILE: &'static str = "journal.jsonl";
    const ARCHIVE_DIR: &'static str = "journal_archive";

    /// Create a new JournalService writing under the given data dir.
    pub fn new(data_dir: &Path, config: JournalConfig) -> Self {
        Self {
            log_path: data_dir.join(Self::LOG_FILE),
            archive_dir: data_dir.join(Self::ARCHIVE_DIR),
            config,
        }
    }

    /// Create from ResolvedConfig.
    /// Returns None if journalling is disabled.
    pub fn try_from_config(config: &ResolvedConfig) -> Option<Self> {
        if config.journal.enabled {
            Some(Self::new(&config.data_dir, config.journal.clone()))
        } else {
            None
        }
    }

    /// Check if journalling is enabled.
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Check if a specific operation should be journalled.
    pub fn should_log(&self, op: Operation) -> bool {
        if !self.config.enabled {
            return false;
        }
        // Empty log_operations means log all operations
        if self.config.log_operations.is_empty() {
            return true;
        }
        self.config.log_operations.contains(&op.to_string())
    }

    /// Append a journal entry.
    pub fn log(&self, entry: JournalEntry) -> Result<()> {
        if !self.should_log(entry.op) {
            return Ok(());
        }

        if let Some(parent) = self.log_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string(&entry)?;

        let mut file =
            OpenOptions::new().create(true).append(true).open(&self.log_path)?;

        writeln!(file, "{}", json)?;
        Ok(())
    }

    /// Log a session start.
    pub fn log_start(&self, source: Source, queue_len: usize) -> Result<()> {
        self.log(
            JournalEntry::new(Operation::Start)
                .with_source(source)
                .with_meta("queue_len", queue_len),
        )
    }

    /// Log a session exit, recording the final counters.
    pub fn log_exit(&self, source: Source, stats: &SessionStats) -> Result<()> {
        self.log(
            JournalEntry::new(Operation::Exit)
                .with_source(source)
                .with_meta("completed", stats.completed)
                .with_meta("skipped", stats.skipped)
                .with_meta("remaining", stats.remaining),
        )
    }

    /// Log a task completion.
    pub fn log_complete(&self, id: &str) -> Result<()> {
        self.log(JournalEntry::new(Operation::Complete).with_id(id))
    }

    /// Log a task skip.
    pub fn log_skip(&self, id: &str) -> Result<()> {
        self.log(JournalEntry::new(Operation::Skip).with_id(id))
    }

    /// Log a "not today" deferral.
    pub fn log_defer(&self, id: &str) -> Result<()> {
        self.log(JournalEntry::new(Operation::Defer).with_id(id))
    }

    /// Log a mid-session queue refresh.
    pub fn log_refresh(&self, queue_len: usize) -> Result<()> {
        self.log(JournalEntry::new(Operation::Refresh).with_meta("queue_len", queue_len))
    }

    /// Read entries within a date range.
    pub fn read_entries(
        &self,
        since: Option<DateTime<Utc>>,
        until: Option<DateTime<Utc>>,
    ) -> Result<Vec<JournalEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)?;
        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            if let Ok(entry) = serde_json::from_str::<JournalEntry>(&line) {
                if let Some(s) = since
                    && entry.ts < s
                {
                    continue;
                }
                if let Some(u) = until
                    && entry.ts > u
                {
                    continue;
                }
                entries.push(entry);
            }
        }

        Ok(entries)
    }

    /// Perform journal rotation if needed.
    /// Should be called at startup, before a session begins.
    pub fn rotate_if_needed(&self) -> Result<()> {
        super::rotation::rotate_journal(
            &self.log_path,
            &self.archive_dir,
            self.config.retention_days,
        )
    }

    /// Get the path to the journal file.
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }
}
