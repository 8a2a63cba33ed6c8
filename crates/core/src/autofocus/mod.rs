//! Autofocus session and queue management.
//!
//! Turns an unordered set of task identifiers into a single-task-at-a-time
//! review flow. [`AutofocusSession`] owns the session lifecycle,
//! [`TaskQueue`] owns the ordering and the cursor, and [`SessionStats`] is
//! a derived progress snapshot.

mod queue;
mod session;
mod source;
mod stats;

pub use queue::TaskQueue;
pub use session::AutofocusSession;
pub use source::{ParseSourceError, Source};
pub use stats::SessionStats;
