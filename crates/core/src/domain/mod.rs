// Domain Layer - Pure business logic and entities

pub mod error;
pub mod ordering;
pub mod queue;
pub mod user;

// Re-exports
pub use error::DomainError;
pub use queue::{Queue, QueueId, RecipeId, RecipePosition};
pub use user::{NewUser, User, UserId};
