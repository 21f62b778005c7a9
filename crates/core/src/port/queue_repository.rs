// Queue Repository Port (Interface)

use crate::domain::{Queue, QueueId, RecipeId, UserId};
use crate::error::Result;
use async_trait::async_trait;

/// Durable storage for recipe queues
///
/// `replace` is the only mutation of an existing queue. It is a
/// compare-and-swap on `Queue::version`: implementations must check the
/// version, overwrite the sequence, stamp `updated_at` and bump the version in
/// one atomic step.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QueueRepository: Send + Sync {
    /// Create an empty queue owned by `user_id`
    ///
    /// # Errors
    /// - `AppError::NotFound` if the user does not exist
    async fn create(&self, user_id: UserId) -> Result<Queue>;

    /// Load the current sequence and metadata
    ///
    /// # Errors
    /// - `AppError::NotFound` if no queue has this id
    async fn fetch(&self, id: QueueId) -> Result<Queue>;

    /// Overwrite the stored sequence if it is still at `expected_version`
    ///
    /// # Errors
    /// - `AppError::Conflict` if another writer replaced it since the fetch
    /// - `AppError::NotFound` if the queue no longer exists
    /// - `AppError::Database` on any storage fault (no partial success)
    async fn replace(&self, id: QueueId, recipes: &[RecipeId], expected_version: i64)
        -> Result<()>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use crate::error::AppError;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// In-memory QueueRepository with call counters and fault injection
    #[derive(Default)]
    pub struct InMemoryQueueRepository {
        queues: Mutex<HashMap<QueueId, Queue>>,
        next_id: Mutex<QueueId>,
        fetch_calls: AtomicUsize,
        replace_calls: AtomicUsize,
        failing_replaces: AtomicUsize,
    }

    impl InMemoryQueueRepository {
        pub fn new() -> Self {
            Self::default()
        }

        /// Seed a queue directly (bypasses `create`)
        pub fn with_queue(self, id: QueueId, user_id: UserId, recipes: Vec<RecipeId>) -> Self {
            let mut queue = Queue::new(id, user_id, 0);
            queue.recipes = recipes;
            self.queues.lock().unwrap().insert(id, queue);
            let mut next_id = self.next_id.lock().unwrap();
            *next_id = (*next_id).max(id);
            drop(next_id);
            self
        }

        /// Make the next `count` replace calls fail with a storage fault
        pub fn fail_next_replaces(&self, count: usize) {
            self.failing_replaces.store(count, Ordering::SeqCst);
        }

        pub fn fetch_calls(&self) -> usize {
            self.fetch_calls.load(Ordering::SeqCst)
        }

        pub fn replace_calls(&self) -> usize {
            self.replace_calls.load(Ordering::SeqCst)
        }

        pub fn snapshot(&self, id: QueueId) -> Option<Queue> {
            self.queues.lock().unwrap().get(&id).cloned()
        }
    }

    #[async_trait]
    impl QueueRepository for InMemoryQueueRepository {
        async fn create(&self, user_id: UserId) -> Result<Queue> {
            let mut next_id = self.next_id.lock().unwrap();
            *next_id += 1;
            let queue = Queue::new(*next_id, user_id, 0);
            self.queues.lock().unwrap().insert(queue.id, queue.clone());
            Ok(queue)
        }

        async fn fetch(&self, id: QueueId) -> Result<Queue> {
            self.fetch_calls.fetch_add(1, Ordering::SeqCst);
            // Yield so concurrent cycles get a chance to interleave
            tokio::task::yield_now().await;
            self.queues
                .lock()
                .unwrap()
                .get(&id)
                .cloned()
                .ok_or_else(|| AppError::NotFound(format!("Queue {} not found", id)))
        }

        async fn replace(
            &self,
            id: QueueId,
            recipes: &[RecipeId],
            expected_version: i64,
        ) -> Result<()> {
            self.replace_calls.fetch_add(1, Ordering::SeqCst);
            tokio::task::yield_now().await;

            let injected = self
                .failing_replaces
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
                .is_ok();
            if injected {
                return Err(AppError::Database("injected storage fault".to_string()));
            }

            let mut queues = self.queues.lock().unwrap();
            let queue = queues
                .get_mut(&id)
                .ok_or_else(|| AppError::NotFound(format!("Queue {} not found", id)))?;
            if queue.version != expected_version {
                return Err(AppError::Conflict(format!(
                    "Queue {} is at version {}, expected {}",
                    id, queue.version, expected_version
                )));
            }
            queue.recipes = recipes.to_vec();
            queue.version += 1;
            queue.updated_at += 1;
            Ok(())
        }
    }
}
