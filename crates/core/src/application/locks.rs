// Per-queue mutual exclusion

use crate::domain::QueueId;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

/// Keyed async locks, one per queue id
///
/// Holding the guard serializes read-modify-write cycles on one queue while
/// cycles on other queues proceed in parallel. Dropping the guard (including
/// when the request future is cancelled) releases it.
#[derive(Default)]
pub struct QueueLocks {
    locks: Mutex<HashMap<QueueId, Arc<AsyncMutex<()>>>>,
}

impl QueueLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `queue_id`
    pub async fn acquire(&self, queue_id: QueueId) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().unwrap_or_else(|e| e.into_inner());
            // Entries only the map still references are idle
            locks.retain(|_, lock| Arc::strong_count(lock) > 1);
            Arc::clone(locks.entry(queue_id).or_default())
        };
        lock.lock_owned().await
    }

    /// Number of queues with a holder or waiter (after the last prune)
    pub fn tracked(&self) -> usize {
        self.locks.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}
