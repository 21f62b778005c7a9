// Domain Error Types

use super::queue::RecipeId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Recipe {0} is not in the queue")]
    NotPresent(RecipeId),

    #[error("Invalid position {position}: must be between 0 and {max}")]
    InvalidPosition { position: i64, max: i64 },
}

pub type Result<T> = std::result::Result<T, DomainError>;
