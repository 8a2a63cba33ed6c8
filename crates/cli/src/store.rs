//! SQLite-backed task store.
//!
//! The external collaborator of the autofocus session: it mints task
//! identifiers, resolves them to titles, and records the dispositions the
//! session emits (completed, "not today"). The session itself never
//! touches task content; it only moves identifiers around.

use std::path::Path;

use chrono::{NaiveDate, Utc};
use rusqlite::{Connection, OptionalExtension, params};
use thiserror::Error;

use dayboard_core::autofocus::Source;

#[derive(Debug, Error)]
pub enum TaskStoreError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Task not found: {0}")]
    TaskNotFound(String),
}

type Result<T> = std::result::Result<T, TaskStoreError>;

/// Which list a task lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Today,
    Inbox,
}

impl Bucket {
    pub fn as_str(self) -> &'static str {
        match self {
            Bucket::Today => "today",
            Bucket::Inbox => "inbox",
        }
    }

    fn from_db(s: &str) -> Self {
        match s {
            "inbox" => Bucket::Inbox,
            _ => Bucket::Today,
        }
    }
}

/// An open task row, as listed.
#[derive(Debug, Clone)]
pub struct TaskRecord {
    pub id: String,
    pub title: String,
    pub bucket: Bucket,
    pub not_today_on: Option<NaiveDate>,
}

/// Task database handle.
pub struct TaskStore {
    conn: Connection,
}

impl TaskStore {
    /// Open or create a task database at the given path.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA busy_timeout = 5000;",
        )?;
        init_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Create an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        init_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Insert a new task, returning its freshly minted identifier.
    pub fn add(&self, title: &str, bucket: Bucket) -> Result<String> {
        let seq: i64 = self.conn.query_row(
            "SELECT COALESCE(MAX(seq), 0) + 1 FROM tasks",
            [],
            |row| row.get(0),
        )?;
        let id = format!("TSK-{:03}", seq);

        self.conn.execute(
            "INSERT INTO tasks (id, title, bucket, done, created_at, seq)
             VALUES (?1, ?2, ?3, 0, ?4, ?5)",
            params![id, title, bucket.as_str(), Utc::now().to_rfc3339(), seq],
        )?;
        Ok(id)
    }

    /// Ordered identifier list feeding an autofocus session.
    ///
    /// Excludes done tasks and tasks deferred for `today`; a deferred task
    /// is out of today's scope in every view and reappears tomorrow.
    /// Insertion order is review order.
    pub fn ids_for(&self, source: Source, today: NaiveDate) -> Result<Vec<String>> {
        let bucket_clause = match source {
            Source::Today => "AND bucket = 'today'",
            Source::Inbox => "AND bucket = 'inbox'",
            Source::All => "",
        };
        let sql = format!(
            "SELECT id FROM tasks
             WHERE done = 0
               AND (not_today_on IS NULL OR not_today_on <> ?1)
               {bucket_clause}
             ORDER BY seq",
        );

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params![today.to_string()], |row| {
            row.get::<_, String>(0)
        })?;
        let mut ids = Vec::new();
        for id in rows {
            ids.push(id?);
        }
        Ok(ids)
    }

    /// Apply a completion intent.
    pub fn mark_done(&self, id: &str) -> Result<()> {
        let rows = self.conn.execute(
            "UPDATE tasks SET done = 1, done_at = ?1 WHERE id = ?2",
            params![Utc::now().to_rfc3339(), id],
        )?;
        if rows == 0 {
            return Err(TaskStoreError::TaskNotFound(id.to_string()));
        }
        Ok(())
    }

    /// Apply a "not today" intent: hide the task from `today`'s sessions.
    pub fn mark_not_today(&self, id: &str, today: NaiveDate) -> Result<()> {
        let rows = self.conn.execute(
            "UPDATE tasks SET not_today_on = ?1 WHERE id = ?2",
            params![today.to_string(), id],
        )?;
        if rows == 0 {
            return Err(TaskStoreError::TaskNotFound(id.to_string()));
        }
        Ok(())
    }

    /// Resolve an identifier to its display title.
    pub fn title_of(&self, id: &str) -> Result<Option<String>> {
        let title = self
            .conn
            .query_row(
                "SELECT title FROM tasks WHERE id = ?1",
                params![id],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(title)
    }

    /// Open tasks for listing, in review order.
    pub fn list(&self, source: Option<Source>, today: NaiveDate) -> Result<Vec<TaskRecord>> {
        let bucket_clause = match source {
            Some(Source::Today) => "AND bucket = 'today'",
            Some(Source::Inbox) => "AND bucket = 'inbox'",
            Some(Source::All) | None => "",
        };
        let sql = format!(
            "SELECT id, title, bucket, not_today_on FROM tasks
             WHERE done = 0 {bucket_clause}
             ORDER BY seq",
        );

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], |row| {
            Ok(TaskRecord {
                id: row.get(0)?,
                title: row.get(1)?,
                bucket: Bucket::from_db(&row.get::<_, String>(2)?),
                not_today_on: row
                    .get::<_, Option<String>>(3)?
                    .and_then(|s| s.parse().ok()),
            })
        })?;

        let mut records = Vec::new();
        for record in rows {
            let mut record = record?;
            // A deferral from a previous day has expired.
            if record.not_today_on.is_some_and(|d| d != today) {
                record.not_today_on = None;
            }
            records.push(record);
        }
        Ok(records)
    }
}

fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS tasks (
            id           TEXT PRIMARY KEY,
            title        TEXT NOT NULL,
            bucket       TEXT NOT NULL DEFAULT 'today',
            done         INTEGER NOT NULL DEFAULT 0,
            done_at      TEXT,
            not_today_on TEXT,
            created_at   TEXT NOT NULL,
            seq          INTEGER NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_tasks_open ON tasks (done, bucket, seq);",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_add_mints_sequential_ids() {
        let store = TaskStore::open_in_memory().unwrap();
        assert_eq!(store.add("first", Bucket::Today).unwrap(), "TSK-001");
        assert_eq!(store.add("second", Bucket::Inbox).unwrap(), "TSK-002");
        assert_eq!(store.add("third", Bucket::Today).unwrap(), "TSK-003");
    }

    #[test]
    fn test_ids_for_filters_by_source_in_order() {
        let store = TaskStore::open_in_memory().unwrap();
        let a = store.add("a", Bucket::Today).unwrap();
        let b = store.add("b", Bucket::Inbox).unwrap();
        let c = store.add("c", Bucket::Today).unwrap();

        let today = day("2026-08-06");
        assert_eq!(store.ids_for(Source::Today, today).unwrap(), [a.clone(), c.clone()]);
        assert_eq!(store.ids_for(Source::Inbox, today).unwrap(), [b.clone()]);
        assert_eq!(store.ids_for(Source::All, today).unwrap(), [a, b, c]);
    }

    #[test]
    fn test_done_tasks_drop_out() {
        let store = TaskStore::open_in_memory().unwrap();
        let a = store.add("a", Bucket::Today).unwrap();
        let b = store.add("b", Bucket::Today).unwrap();

        store.mark_done(&a).unwrap();
        assert_eq!(store.ids_for(Source::Today, day("2026-08-06")).unwrap(), [b]);
    }

    #[test]
    fn test_not_today_hides_until_tomorrow() {
        let store = TaskStore::open_in_memory().unwrap();
        let a = store.add("a", Bucket::Today).unwrap();

        store.mark_not_today(&a, day("2026-08-06")).unwrap();
        assert!(store.ids_for(Source::Today, day("2026-08-06")).unwrap().is_empty());
        assert!(store.ids_for(Source::All, day("2026-08-06")).unwrap().is_empty());

        // The next day it is back in scope.
        assert_eq!(store.ids_for(Source::Today, day("2026-08-07")).unwrap(), [a]);
    }

    #[test]
    fn test_mark_done_unknown_id_fails() {
        let store = TaskStore::open_in_memory().unwrap();
        match store.mark_done("TSK-999") {
            Err(TaskStoreError::TaskNotFound(id)) => assert_eq!(id, "TSK-999"),
            other => panic!("expected TaskNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_title_of() {
        let store = TaskStore::open_in_memory().unwrap();
        let id = store.add("Water the plants", Bucket::Today).unwrap();
        assert_eq!(store.title_of(&id).unwrap().as_deref(), Some("Water the plants"));
        assert_eq!(store.title_of("TSK-999").unwrap(), None);
    }

    #[test]
    fn test_list_clears_expired_deferrals() {
        let store = TaskStore::open_in_memory().unwrap();
        let id = store.add("a", Bucket::Today).unwrap();
        store.mark_not_today(&id, day("2026-08-05")).unwrap();

        let records = store.list(None, day("2026-08-06")).unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].not_today_on.is_none());
    }
}
