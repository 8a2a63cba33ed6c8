//! Rotation for the session journal.

use std::collections::HashMap;
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use chrono::{Datelike, Duration, Utc};

use super::service::JournalError;
use super::types::JournalEntry;

type Result<T> = std::result::Result<T, JournalError>;

/// Move journal entries older than the retention window into per-month
/// archive files (`journal_2026-05.jsonl`) and rewrite the live journal
/// with only the recent entries. No-op when the journal does not exist or
/// nothing is old enough to archive.
pub fn rotate_journal(
    log_path: &Path,
    archive_dir: &Path,
    retention_days: u32,
) -> Result<()> {
    if !log_path.exists() {
        return Ok(());
    }

    let cutoff = Utc::now() - Duration::days(i64::from(retention_days));

    let file = File::open(log_path)?;
    let reader = BufReader::new(file);

    let mut recent: Vec<String> = Vec::new();
    let mut by_month: HashMap<String, Vec<String>> = HashMap::new();

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<JournalEntry>(&line) {
            Ok(entry) if entry.ts < cutoff => {
                let month = format!("{}-{:02}", entry.ts.year(), entry.ts.month());
                by_month.entry(month).or_default().push(line);
            }
            // Recent entries and unparseable lines stay in the live journal.
            _ => recent.push(line),
        }
    }

    if by_month.is_empty() {
        return Ok(());
    }

    fs::create_dir_all(archive_dir)?;
    for (month, lines) in by_month {
        let archive_path = archive_dir.join(format!("journal_{}.jsonl", month));
        let mut file =
            OpenOptions::new().create(true).append(true).open(&archive_path)?;
        for line in lines {
            writeln!(file, "{}", line)?;
        }
    }

    let mut file = File::create(log_path)?;
    for line in recent {
        writeln!(file, "{}", line)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use crate::journal::types::Operation;

    use super::*;

    #[test]
    fn test_rotate_missing_file_is_noop() {
        let tmp = tempdir().unwrap();
        rotate_journal(
            &tmp.path().join("nope.jsonl"),
            &tmp.path().join("archive"),
            90,
        )
        .unwrap();
    }

    #[test]
    fn test_rotate_keeps_recent_entries() {
        let tmp = tempdir().unwrap();
        let log_path = tmp.path().join("journal.jsonl");
        let archive_dir = tmp.path().join("archive");

        let entry = JournalEntry::new(Operation::Complete).with_id("TSK-001");
        fs::write(&log_path, format!("{}\n", serde_json::to_string(&entry).unwrap()))
            .unwrap();

        rotate_journal(&log_path, &archive_dir, 90).unwrap();

        let content = fs::read_to_string(&log_path).unwrap();
        assert!(content.contains("TSK-001"));
        assert!(!archive_dir.exists());
    }

    #[test]
    fn test_rotate_archives_old_entries_by_month() {
        let tmp = tempdir().unwrap();
        let log_path = tmp.path().join("journal.jsonl");
        let archive_dir = tmp.path().join("archive");

        let mut old = JournalEntry::new(Operation::Complete).with_id("OLD-001");
        old.ts = Utc::now() - Duration::days(120);
        let recent = JournalEntry::new(Operation::Complete).with_id("NEW-001");

        let content = format!(
            "{}\n{}\n",
            serde_json::to_string(&old).unwrap(),
            serde_json::to_string(&recent).unwrap()
        );
        fs::write(&log_path, content).unwrap();

        rotate_journal(&log_path, &archive_dir, 90).unwrap();

        let live = fs::read_to_string(&log_path).unwrap();
        assert!(live.contains("NEW-001"));
        assert!(!live.contains("OLD-001"));

        let archives: Vec<_> = fs::read_dir(&archive_dir).unwrap().collect();
        assert_eq!(archives.len(), 1);
        let name = archives[0].as_ref().unwrap().file_name();
        assert!(name.to_string_lossy().starts_with("journal_"));

        let archived =
            fs::read_to_string(archives[0].as_ref().unwrap().path()).unwrap();
        assert!(archived.contains("OLD-001"));
    }

    #[test]
    fn test_unparseable_lines_stay_in_live_journal() {
        let tmp = tempdir().unwrap();
        let log_path = tmp.path().join("journal.jsonl");
        let archive_dir = tmp.path().join("archive");

        let mut old = JournalEntry::new(Operation::Skip).with_id("OLD-002");
        old.ts = Utc::now() - Duration::days(200);
        let content =
            format!("garbage line\n{}\n", serde_json::to_string(&old).unwrap());
        fs::write(&log_path, content).unwrap();

        rotate_journal(&log_path, &archive_dir, 90).unwrap();

        let live = fs::read_to_string(&log_path).unwrap();
        assert!(live.contains("garbage line"));
        assert!(!live.contains("OLD-002"));
    }
}
