// Queue Service - Store/Engine/Store orchestration for recipe queues

mod validate;


pub use validate::validate_queue_id;

use crate::application::locks::QueueLocks;
use crate::application::retry::RetryPolicy;
use crate::domain::error::Result as DomainResult;
use crate::domain::{ordering, QueueId, RecipeId, RecipePosition};
use crate::error::Result;
use crate::port::QueueRepository;
use std::sync::Arc;
use tracing::{debug, info};

/// Queue Service
///
/// Every mutating call runs exactly one fetch → apply → replace cycle while
/// holding the queue's lock. Engine failures return before the store is
/// written. Storage faults and version conflicts re-run the whole cycle
/// according to the retry policy.
pub struct QueueService {
    queue_repo: Arc<dyn QueueRepository>,
    locks: QueueLocks,
    retry_policy: RetryPolicy,
}

impl QueueService {
    pub fn new(queue_repo: Arc<dyn QueueRepository>, retry_policy: RetryPolicy) -> Self {
        Self {
            queue_repo,
            locks: QueueLocks::new(),
            retry_policy,
        }
    }

    /// Ordered contents of the queue
    pub async fn list(&self, queue_id: QueueId) -> Result<Vec<RecipeId>> {
        validate_queue_id(queue_id)?;

        let repo = self.queue_repo.as_ref();
        let queue = self
            .retry_policy
            .run("list", move || repo.fetch(queue_id))
            .await?;

        Ok(queue.recipes)
    }

    /// Next recipe to cook
    ///
    /// `Ok(None)` means the queue exists but is empty; a missing queue is
    /// `AppError::NotFound`.
    pub async fn next(&self, queue_id: QueueId) -> Result<Option<RecipeId>> {
        validate_queue_id(queue_id)?;

        let repo = self.queue_repo.as_ref();
        let queue = self
            .retry_policy
            .run("next", move || repo.fetch(queue_id))
            .await?;

        let next = ordering::peek_first(&queue.recipes);
        if next.is_none() {
            debug!(queue_id = %queue_id, "Queue is empty");
        }
        Ok(next)
    }

    /// Append a recipe; returns the new queue length
    pub async fn enqueue(&self, queue_id: QueueId, recipe_id: RecipeId) -> Result<usize> {
        validate_queue_id(queue_id)?;

        let recipes = self
            .mutate(queue_id, "enqueue", move |seq| {
                Ok(ordering::append(seq, recipe_id))
            })
            .await?;

        info!(queue_id = %queue_id, recipe_id = %recipe_id, len = recipes.len(), "Recipe enqueued");
        Ok(recipes.len())
    }

    /// Remove the first occurrence of a recipe
    pub async fn dequeue(&self, queue_id: QueueId, recipe_id: RecipeId) -> Result<()> {
        validate_queue_id(queue_id)?;

        self.mutate(queue_id, "dequeue", move |seq| {
            ordering::remove_first_match(seq, recipe_id)
        })
        .await?;

        info!(queue_id = %queue_id, recipe_id = %recipe_id, "Recipe dequeued");
        Ok(())
    }

    /// Move the first occurrence of a recipe to a new index
    pub async fn reorder(&self, queue_id: QueueId, target: RecipePosition) -> Result<()> {
        validate_queue_id(queue_id)?;

        self.mutate(queue_id, "reorder", move |seq| {
            ordering::move_to_position(seq, target.recipe_id, target.position)
        })
        .await?;

        info!(
            queue_id = %queue_id,
            recipe_id = %target.recipe_id,
            position = %target.position,
            "Queue reordered"
        );
        Ok(())
    }

    /// One guarded read-modify-write cycle, retried as a whole
    async fn mutate<F>(&self, queue_id: QueueId, operation: &str, apply: F) -> Result<Vec<RecipeId>>
    where
        F: Fn(&[RecipeId]) -> DomainResult<Vec<RecipeId>> + Send + Sync,
    {
        let _guard = self.locks.acquire(queue_id).await;

        let repo = self.queue_repo.as_ref();
        let apply = &apply;

        self.retry_policy
            .run(operation, move || async move {
                let queue = repo.fetch(queue_id).await?;
                let updated = apply(&queue.recipes)?;

                if updated == queue.recipes {
                    debug!(queue_id = %queue_id, "Order unchanged, skipping write");
                } else {
                    repo.replace(queue_id, &updated, queue.version).await?;
                }

                Ok(updated)
            })
            .await
    }
}
