//! Per-repository locking
//!
//! The checkout engine is not reentrant for a single repository: two
//! invocations racing on branch deletion and recreation can leave the
//! working tree in a broken state. `RepoLocks` hands out one async
//! mutex per `owner/repo` key so that callers serialize access per
//! repository while remaining free to run different repositories in
//! parallel.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

/// Keyed mutual exclusion over repository working trees
#[derive(Debug, Clone, Default)]
pub struct RepoLocks {
    locks: Arc<Mutex<HashMap<String, Arc<AsyncMutex<()>>>>>,
}

impl RepoLocks {
    /// Create an empty lock table
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the lock for a repository, waiting if it is held
    ///
    /// The lock is released when the returned guard is dropped,
    /// including on error paths.
    pub async fn acquire(&self, key: &str) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().unwrap_or_else(|e| e.into_inner());
            locks
                .entry(key.to_string())
                .or_insert_with(|| Arc::new(AsyncMutex::new(())))
                .clone()
        };
        lock.lock_owned().await
    }
}
