//! Autofocus session controller.

use chrono::{DateTime, Local};

use crate::storage::{MemoryStore, StateStore};

use super::queue::TaskQueue;
use super::source::Source;
use super::stats::SessionStats;

/// Storage key under which the last-used source survives restarts.
const SOURCE_KEY: &str = "autofocus.source";

/// One run of the autofocus review flow, from `start` to `exit`.
///
/// Owned by the caller (one instance per UI), single writer. All queue
/// mutations go through this type while a session is active. Only the
/// last-used [`Source`] is persisted across restarts; queue contents never
/// are, so a fresh session always starts from the caller-supplied
/// identifier list rather than stale state.
///
/// Persistence is fire-and-forget: the in-memory state is the source of
/// truth for the process lifetime, and storage failures are logged and
/// swallowed.
pub struct AutofocusSession {
    active: bool,
    source: Source,
    started_at: Option<DateTime<Local>>,
    queue: TaskQueue,
    store: Box<dyn StateStore>,
}

impl AutofocusSession {
    /// Create an inactive session, recovering the last-used source from
    /// the store.
    pub fn new(store: Box<dyn StateStore>) -> Self {
        let source = match store.get(SOURCE_KEY) {
            Ok(Some(raw)) => raw.parse::<Source>().unwrap_or_default(),
            Ok(None) => Source::default(),
            Err(e) => {
                tracing::warn!("failed to read last-used source: {e}");
                Source::default()
            }
        };
        Self {
            active: false,
            source,
            started_at: None,
            queue: TaskQueue::new(),
            store,
        }
    }

    /// Begin a new session, implicitly replacing any active one.
    ///
    /// Cursor, skipped set and completed counter all reset; the start time
    /// is recorded as now and the source classification is persisted.
    pub fn start(&mut self, source: Source, task_ids: Vec<String>) {
        self.queue.reset(task_ids);
        self.source = source;
        self.started_at = Some(Local::now());
        self.active = true;

        if let Err(e) = self.store.set(SOURCE_KEY, source.as_str()) {
            tracing::warn!("failed to persist source: {e}");
        }
    }

    /// End the session and drop all ephemeral state.
    pub fn exit(&mut self) {
        self.queue.clear();
        self.started_at = None;
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Current source while active, last-used source otherwise.
    pub fn source(&self) -> Source {
        self.source
    }

    pub fn started_at(&self) -> Option<DateTime<Local>> {
        self.started_at
    }

    /// Identifier of the task currently presented to the user, if any.
    pub fn current_task_id(&self) -> Option<&str> {
        self.queue.current()
    }

    /// Complete the current task; returns the removed identifier as an
    /// intent for the external store.
    pub fn complete_current(&mut self) -> Option<String> {
        self.queue.complete_current()
    }

    /// Push the current task to the end of the queue.
    pub fn skip_current(&mut self) {
        self.queue.skip_current();
    }

    /// Defer the current task out of today's scope; returns the removed
    /// identifier as an intent for the external store.
    pub fn mark_not_today(&mut self) -> Option<String> {
        self.queue.mark_not_today()
    }

    pub fn select_next(&mut self) {
        self.queue.select_next();
    }

    pub fn select_previous(&mut self) {
        self.queue.select_previous();
    }

    /// Merge a freshly fetched identifier list into the live queue (the
    /// external list changed while the session was running).
    pub fn refresh_queue(&mut self, task_ids: Vec<String>) {
        self.queue.refresh(task_ids);
    }

    /// Progress snapshot. Pure read.
    pub fn stats(&self) -> SessionStats {
        SessionStats::from_queue(&self.queue)
    }

    /// Read access to the queue for rendering.
    pub fn queue(&self) -> &TaskQueue {
        &self.queue
    }
}

impl Default for AutofocusSession {
    fn default() -> Self {
        Self::new(Box::new(MemoryStore::new()))
    }
}

impl std::fmt::Debug for AutofocusSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AutofocusSession")
            .field("active", &self.active)
            .field("source", &self.source)
            .field("started_at", &self.started_at)
            .field("queue", &self.queue)
            .finish_non_exhaustive()
    }
}
