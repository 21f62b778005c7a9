//! SDK Request/Response Types
//!
//! Mirrors the JSON-RPC types served by foodq-server.

use serde::{Deserialize, Serialize};

pub type QueueId = i64;
pub type RecipeId = i64;
pub type UserId = i64;

#[derive(Debug, Clone, Serialize)]
pub(crate) struct QueueRequest {
    pub queue_id: QueueId,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct RecipeRequest {
    pub queue_id: QueueId,
    pub recipe_id: RecipeId,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct ReorderRequest {
    pub queue_id: QueueId,
    pub recipe_id: RecipeId,
    pub position: i64,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct CreateQueueRequest {
    pub user_id: UserId,
}

/// Request to register a user
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub subscription: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse {
    pub queue_id: QueueId,
    pub recipes: Vec<RecipeId>,
}

/// `recipe_id` is `None` exactly when `empty` is true
#[derive(Debug, Clone, Deserialize)]
pub struct NextResponse {
    pub queue_id: QueueId,
    pub recipe_id: Option<RecipeId>,
    pub empty: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnqueueResponse {
    pub queue_id: QueueId,
    pub recipe_id: RecipeId,
    pub length: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DequeueResponse {
    pub queue_id: QueueId,
    pub recipe_id: RecipeId,
    pub removed: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReorderResponse {
    pub queue_id: QueueId,
    pub recipe_id: RecipeId,
    pub position: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateQueueResponse {
    pub queue_id: QueueId,
    pub user_id: UserId,
    pub created_at: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserResponse {
    pub user_id: UserId,
}
