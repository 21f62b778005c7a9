//! RPC Request/Response Types
//!
//! Parameters and results of the versioned JSON-RPC methods.

use foodq_core::domain::{QueueId, RecipeId, UserId};
use serde::{Deserialize, Serialize};

/// queue.list.v1 / queue.next.v1 - Address a queue
#[derive(Debug, Deserialize)]
pub struct QueueRequest {
    pub queue_id: QueueId,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListResponse {
    pub queue_id: QueueId,
    pub recipes: Vec<RecipeId>,
}

/// `recipe_id` is null and `empty` is true when the queue has no entries
#[derive(Debug, Clone, Serialize)]
pub struct NextResponse {
    pub queue_id: QueueId,
    pub recipe_id: Option<RecipeId>,
    pub empty: bool,
}

/// queue.enqueue.v1 / queue.dequeue.v1 - Address one recipe in a queue
#[derive(Debug, Deserialize)]
pub struct RecipeRequest {
    pub queue_id: QueueId,
    pub recipe_id: RecipeId,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnqueueResponse {
    pub queue_id: QueueId,
    pub recipe_id: RecipeId,
    pub length: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct DequeueResponse {
    pub queue_id: QueueId,
    pub recipe_id: RecipeId,
    pub removed: bool,
}

/// queue.reorder.v1 - Move a recipe to a new index
#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    pub queue_id: QueueId,
    pub recipe_id: RecipeId,
    pub position: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReorderResponse {
    pub queue_id: QueueId,
    pub recipe_id: RecipeId,
    pub position: i64,
}

/// queue.create.v1 - Create the queue owned by a user
#[derive(Debug, Deserialize)]
pub struct CreateQueueRequest {
    pub user_id: UserId,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateQueueResponse {
    pub queue_id: QueueId,
    pub user_id: UserId,
    pub created_at: i64,
}

/// user.create.v1 - Register a user
#[derive(Debug, Default, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub subscription: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateUserResponse {
    pub user_id: UserId,
}
