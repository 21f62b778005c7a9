// Queue Domain Model

use super::user::UserId;
use serde::{Deserialize, Serialize};

/// Queue identifier (assigned by the store)
pub type QueueId = i64;

/// Opaque recipe reference. Existence is validated elsewhere.
pub type RecipeId = i64;

/// A user's ordered list of recipes to cook next
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Queue {
    pub id: QueueId,
    pub user_id: UserId,

    /// Order is significant; duplicates are allowed
    pub recipes: Vec<RecipeId>,

    pub created_at: i64, // epoch ms
    pub updated_at: i64, // epoch ms

    /// Bumped by every successful replace (compare-and-swap token)
    pub version: i64,
}

impl Queue {
    /// Create an empty queue with explicit id and timestamp
    pub fn new(id: QueueId, user_id: UserId, created_at: i64) -> Self {
        Self {
            id,
            user_id,
            recipes: Vec::new(),
            created_at,
            updated_at: created_at,
            version: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

/// Reorder request payload: where a recipe should end up.
///
/// `position` is signed so that a negative index from the wire is reported as
/// an invalid position rather than a parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipePosition {
    pub recipe_id: RecipeId,
    pub position: i64,
}

impl RecipePosition {
    pub fn new(recipe_id: RecipeId, position: i64) -> Self {
        Self {
            recipe_id,
            position,
        }
    }
}
