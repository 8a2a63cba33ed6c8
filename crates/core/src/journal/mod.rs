//! Session journalling.
//!
//! Appends every autofocus session operation to a structured JSONL file
//! (`journal.jsonl` in the profile's data dir) so past sessions can be
//! reviewed with `dbd journal`. Journalling sits around the queue engine,
//! not inside it: a failed append never fails the mutation it records.

mod rotation;
mod service;
mod types;

pub use rotation::rotate_journal;
pub use service::{JournalError, JournalService};
pub use types::{JournalEntry, Operation};
