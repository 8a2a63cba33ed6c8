//! Key/value persistence for the durable slice of dashboard state.
//!
//! A small capability interface consumed by the session controller and the
//! daily cache: two backends ([`FileStore`], [`MemoryStore`]) plus a
//! decorator ([`FallbackStore`]) that tries the primary and falls back,
//! logging transport errors instead of propagating them.

mod fallback;
mod file;
mod memory;

pub use fallback::FallbackStore;
pub use file::FileStore;
pub use memory::MemoryStore;

use thiserror::Error;

/// Error type for storage backends.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to access state file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode state file: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("State store lock is poisoned")]
    Poisoned,
}

/// String key/value store.
///
/// Consumers treat failures as best-effort: the in-memory session state is
/// always the source of truth, and a failed write must never block or fail
/// the mutation that triggered it.
pub trait StateStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}
