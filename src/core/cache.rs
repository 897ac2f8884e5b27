// File: src/core/cache.rs
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;

struct Cached<K, T> {
    revision: K,
    value: T,
}

/// Lazily recomputed value tied to a revision `K` of its source data.
///
/// The state lock is held for the whole recomputation, so at most one runs at
/// a time and callers arriving meanwhile get its result. A value is only served
/// while the revision it was computed for is current.
pub struct ReadCache<K, T> {
    state: Mutex<Option<Cached<K, T>>>,
    recomputations: AtomicU64,
}

impl<K: PartialEq, T: Clone> Default for ReadCache<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PartialEq, T: Clone> ReadCache<K, T> {
    pub fn new() -> Self {
        Self { state: Mutex::new(None), recomputations: AtomicU64::new(0) }
    }

    /// Returns the value for `revision`, computing it if the cached one is
    /// missing or belongs to another revision.
    pub async fn get_value<F, Fut, E>(&self, revision: K, compute: F) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let mut state = self.state.lock().await;
        if let Some(cached) = state.as_ref().filter(|cached| cached.revision == revision) {
            return Ok(cached.value.clone());
        }

        self.recomputations.fetch_add(1, Ordering::Relaxed);
        let value = compute().await?;
        *state = Some(Cached { revision, value: value.clone() });
        Ok(value)
    }

    pub async fn invalidate(&self) {
        *self.state.lock().await = None;
    }

    /// How many times the value has been computed.
    pub fn recomputations(&self) -> u64 {
        self.recomputations.load(Ordering::Relaxed)
    }
}
