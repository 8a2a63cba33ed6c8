//! Review queue engine.
//!
//! Owns the ordered sequence of task identifiers under review, the cursor
//! naming the current task, and the per-session counters driven by
//! completing, skipping and deferring. Identifiers are opaque strings
//! minted by the external task store; resolving them to task content is
//! the store's job.

use std::collections::HashSet;

/// Ordered review queue with a cursor.
///
/// The queue is unique at any instant and insertion order is review order.
/// The cursor always names the current task (`items[cursor]`) while the
/// queue is non-empty; an empty queue means the session is done. Every
/// mutation re-clamps the cursor, so out-of-range reads cannot happen.
///
/// All operations tolerate an empty queue as a silent no-op rather than an
/// error; callers gate on [`TaskQueue::current`] to detect completion.
#[derive(Debug, Clone, Default)]
pub struct TaskQueue {
    items: Vec<String>,
    cursor: usize,
    skipped: HashSet<String>,
    completed: usize,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the queue contents for a fresh session.
    ///
    /// Duplicate identifiers are dropped, keeping the first occurrence.
    /// Cursor, skipped set and completed counter all reset.
    pub fn reset(&mut self, ids: Vec<String>) {
        self.items = dedup_preserving_order(ids);
        self.cursor = 0;
        self.skipped.clear();
        self.completed = 0;
    }

    /// Drop everything (session exit).
    pub fn clear(&mut self) {
        self.items.clear();
        self.cursor = 0;
        self.skipped.clear();
        self.completed = 0;
    }

    /// Identifier currently under review, if any.
    pub fn current(&self) -> Option<&str> {
        self.items.get(self.cursor).map(String::as_str)
    }

    /// Remove the current task and count it as completed.
    ///
    /// Returns the removed identifier so the caller can mark the task done
    /// in the external store.
    pub fn complete_current(&mut self) -> Option<String> {
        if self.items.is_empty() {
            return None;
        }
        let id = self.items.remove(self.cursor);
        self.completed += 1;
        self.clamp_cursor();
        Some(id)
    }

    /// Move the current task to the tail of the queue.
    ///
    /// The cursor stays put, so afterwards it names whatever task shifted
    /// into the slot. A task skipped more than once is recorded in the
    /// skipped set only once. Length is unchanged, so the cursor invariant
    /// holds without re-clamping.
    pub fn skip_current(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let id = self.items.remove(self.cursor);
        self.skipped.insert(id.clone());
        self.items.push(id);
    }

    /// Remove the current task for the rest of the session ("not today").
    ///
    /// Returns the removed identifier; recording the deferral in the
    /// external store is the caller's job. Deferred tasks leave no trace
    /// in the session counters.
    pub fn mark_not_today(&mut self) -> Option<String> {
        if self.items.is_empty() {
            return None;
        }
        let id = self.items.remove(self.cursor);
        self.clamp_cursor();
        Some(id)
    }

    /// Advance the cursor by one, clamped to the last task.
    pub fn select_next(&mut self) {
        if self.cursor + 1 < self.items.len() {
            self.cursor += 1;
        }
    }

    /// Step the cursor back by one, clamped to the first task.
    pub fn select_previous(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Merge a freshly fetched identifier list into the queue.
    ///
    /// Identifiers still present keep their relative order, newly seen
    /// ones are appended at the tail, vanished ones are dropped. Applying
    /// the same list twice changes nothing the second time.
    pub fn refresh(&mut self, ids: Vec<String>) {
        let fresh = dedup_preserving_order(ids);

        let mut merged: Vec<String> = Vec::with_capacity(fresh.len());
        for id in &self.items {
            if fresh.contains(id) {
                merged.push(id.clone());
            }
        }
        for id in fresh {
            if !merged.contains(&id) {
                merged.push(id);
            }
        }

        self.items = merged;
        self.clamp_cursor();
    }

    /// Number of tasks still in the queue.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current cursor position. Meaningful only while the queue is
    /// non-empty; conventionally 0 otherwise.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Tasks completed this session.
    pub fn completed(&self) -> usize {
        self.completed
    }

    /// Distinct tasks skipped at least once this session.
    pub fn skipped_len(&self) -> usize {
        self.skipped.len()
    }

    /// Whether the given task was skipped earlier in this session.
    pub fn was_skipped(&self, id: &str) -> bool {
        self.skipped.contains(id)
    }

    /// Queue contents in review order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.items.len().saturating_sub(1));
    }
}

/// Drop duplicate identifiers, keeping the first occurrence of each.
fn dedup_preserving_order(ids: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    ids.into_iter().filter(|id| seen.insert(id.clone())).collect()
}
