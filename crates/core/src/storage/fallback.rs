//! Primary/fallback store decorator.

use super::{StateStore, StoreError};

/// Tries the primary backend, falling back on failure.
///
/// Transport errors stop here: they are logged and the operation is
/// retried against the fallback. Callers upstream never see an error from
/// this type, matching the contract that persistence must not fail the
/// in-memory mutation that triggered it.
pub struct FallbackStore<P, F> {
    primary: P,
    fallback: F,
}

impl<P: StateStore, F: StateStore> FallbackStore<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: StateStore, F: StateStore> StateStore for FallbackStore<P, F> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match self.primary.get(key) {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::warn!("primary store get('{key}') failed: {e}");
                Ok(self.fallback.get(key).unwrap_or_else(|e| {
                    tracing::warn!("fallback store get('{key}') failed: {e}");
                    None
                }))
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if let Err(e) = self.primary.set(key, value) {
            tracing::warn!("primary store set('{key}') failed: {e}");
            if let Err(e) = self.fallback.set(key, value) {
                tracing::warn!("fallback store set('{key}') failed: {e}");
            }
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        if let Err(e) = self.primary.remove(key) {
            tracing::warn!("primary store remove('{key}') failed: {e}");
            if let Err(e) = self.fallback.remove(key) {
                tracing::warn!("fallback store remove('{key}') failed: {e}");
            }
        }
        Ok(())
    }
}
