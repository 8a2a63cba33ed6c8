//! Session progress snapshot.

use serde::Serialize;

use super::queue::TaskQueue;

/// Progress counters derived from the live queue state.
///
/// `total` counts the tasks the session still owns: what is left in the
/// queue plus what was completed. Tasks removed with "not today" are out
/// of today's scope and leave no trace here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionStats {
    pub completed: usize,
    pub skipped: usize,
    pub remaining: usize,
    pub total: usize,
}

impl SessionStats {
    pub(crate) fn from_queue(queue: &TaskQueue) -> Self {
        let completed = queue.completed();
        let remaining = queue.len();
        Self {
            completed,
            skipped: queue.skipped_len(),
            remaining,
            total: remaining + completed,
        }
    }
}

impl std::fmt::Display for SessionStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} done, {} skipped, {} left",
            self.completed, self.skipped, self.remaining
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_is_remaining_plus_completed() {
        let mut q = TaskQueue::new();
        q.reset(vec!["a".into(), "b".into(), "c".into()]);
        q.complete_current();
        q.skip_current();

        let stats = SessionStats::from_queue(&q);
        assert_eq!(stats.total, stats.remaining + stats.completed);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.skipped, 1);
        assert_eq!(stats.remaining, 2);
        assert_eq!(stats.total, 3);
    }

    #[test]
    fn test_deferred_tasks_leave_no_trace() {
        let mut q = TaskQueue::new();
        q.reset(vec!["a".into(), "b".into()]);
        q.mark_not_today();

        let stats = SessionStats::from_queue(&q);
        assert_eq!(stats.total, 1);
        assert_eq!(stats.remaining, 1);
        assert_eq!(stats.completed, 0);
    }

    #[test]
    fn test_display() {
        let mut q = TaskQueue::new();
        q.reset(vec!["a".into(), "b".into(), "c".into()]);
        q.complete_current();
        q.skip_current();

        let stats = SessionStats::from_queue(&q);
        insta::assert_snapshot!(stats.to_string(), @"1 done, 1 skipped, 2 left");
    }
}
