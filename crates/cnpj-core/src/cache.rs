//! Time-boxed cache of the aggregated table.
//!
//! A performance feature only: a miss recomputes from scratch, and the
//! cache never serves data older than its TTL. The slot is read and
//! refreshed under a single critical section so a half-populated table is
//! never observable.

use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use crate::aggregate::Aggregation;

struct Entry {
    built_at: Instant,
    value: Aggregation,
}

/// Caches the last [`Aggregation`] for up to a configured TTL.
pub struct AggregateCache {
    ttl: Duration,
    slot: Mutex<Option<Entry>>,
}

impl AggregateCache {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slot: Mutex::new(None),
        }
    }

    /// Returns the cached aggregation when it is younger than the TTL,
    /// otherwise rebuilds it with `refresh` and caches the result.
    ///
    /// # Errors
    ///
    /// Propagates the error of `refresh`; a failed refresh leaves the
    /// previous entry untouched.
    pub fn get_or_refresh<F, E>(&self, refresh: F) -> Result<Aggregation, E>
    where
        F: FnOnce() -> Result<Aggregation, E>,
    {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(entry) = slot.as_ref()
            && entry.built_at.elapsed() < self.ttl
        {
            return Ok(entry.value.clone());
        }
        let value = refresh()?;
        *slot = Some(Entry {
            built_at: Instant::now(),
            value: value.clone(),
        });
        Ok(value)
    }

    /// Drops the cached entry; the next access recomputes.
    pub fn invalidate(&self) {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        *slot = None;
    }
}
