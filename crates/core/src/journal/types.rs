//! Session journal types.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::autofocus::Source;

/// Operations that can be journalled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Start,
    Exit,
    Complete,
    Skip,
    Defer,
    Refresh,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Start => write!(f, "start"),
            Operation::Exit => write!(f, "exit"),
            Operation::Complete => write!(f, "complete"),
            Operation::Skip => write!(f, "skip"),
            Operation::Defer => write!(f, "defer"),
            Operation::Refresh => write!(f, "refresh"),
        }
    }
}

/// A single journal entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    /// ISO8601 timestamp
    pub ts: DateTime<Utc>,

    /// Operation type
    pub op: Operation,

    /// Session source, for operations that concern a whole session
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,

    /// Task ID (e.g. "TSK-012") - empty string if not applicable
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Additional metadata (varies by operation)
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub meta: HashMap<String, serde_json::Value>,
}

impl JournalEntry {
    /// Create a new journal entry with the current timestamp.
    pub fn new(op: Operation) -> Self {
        Self {
            ts: Utc::now(),
            op,
            source: None,
            id: String::new(),
            meta: HashMap::new(),
        }
    }

    /// Set the session source.
    pub fn with_source(mut self, source: Source) -> Self {
        self.source = Some(source);
        self
    }

    /// Set the task ID.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Add metadata.
    pub fn with_meta(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        if let Ok(v) = serde_json::to_value(value) {
            self.meta.insert(key.into(), v);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Start.to_string(), "start");
        assert_eq!(Operation::Complete.to_string(), "complete");
        assert_eq!(Operation::Defer.to_string(), "defer");
    }

    #[test]
    fn test_journal_entry_serialization() {
        let entry = JournalEntry::new(Operation::Complete)
            .with_id("TSK-012")
            .with_meta("remaining", 4);

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains(r#""op":"complete""#));
        assert!(json.contains(r#""id":"TSK-012""#));
        assert!(json.contains(r#""remaining":4"#));
    }

    #[test]
    fn test_journal_entry_deserialization() {
        let json = r#"{"ts":"2026-08-06T09:30:00Z","op":"start","source":"today","meta":{"queue_len":5}}"#;
        let entry: JournalEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.op, Operation::Start);
        assert_eq!(entry.source, Some(Source::Today));
        assert!(entry.id.is_empty());
        assert_eq!(entry.meta["queue_len"], 5);
    }

    #[test]
    fn test_empty_id_not_serialized() {
        let entry = JournalEntry::new(Operation::Start).with_source(Source::All);
        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains(r#""id""#));
    }

    #[test]
    fn test_empty_meta_not_serialized() {
        let entry = JournalEntry::new(Operation::Skip).with_id("TSK-001");
        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains(r#""meta""#));
    }
}
