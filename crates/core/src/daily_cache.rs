//! Compute-and-cache-per-day utility.
//!
//! Shared by the dashboard widgets that refresh once per day (quote,
//! background, mantra). A value is stored as a `{date, value}` envelope
//! under a single key; an entry written on a previous day is stale and
//! gets recomputed. Storage failures degrade to computing on every call.

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::storage::StateStore;

#[derive(Debug, Serialize, Deserialize)]
struct Envelope<T> {
    date: NaiveDate,
    value: T,
}

/// Per-day cache over a single [`StateStore`] key.
pub struct DailyCache<'a> {
    store: &'a dyn StateStore,
    key: String,
}

impl<'a> DailyCache<'a> {
    pub fn new(store: &'a dyn StateStore, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    /// Cached value, if one was stored for `today`.
    pub fn get<T: DeserializeOwned>(&self, today: NaiveDate) -> Option<T> {
        let raw = self.store.get(&self.key).ok().flatten()?;
        let envelope: Envelope<T> = serde_json::from_str(&raw).ok()?;
        (envelope.date == today).then_some(envelope.value)
    }

    /// Cached value for `today`, computing and storing it when missing or
    /// stale.
    pub fn get_or_compute<T, F>(&self, today: NaiveDate, compute: F) -> T
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> T,
    {
        if let Some(value) = self.get(today) {
            return value;
        }

        let envelope = Envelope { date: today, value: compute() };
        match serde_json::to_string(&envelope) {
            Ok(raw) => {
                if let Err(e) = self.store.set(&self.key, &raw) {
                    tracing::warn!("failed to cache '{}': {e}", self.key);
                }
            }
            Err(e) => tracing::warn!("failed to encode cache entry '{}': {e}", self.key),
        }
        envelope.value
    }
}
