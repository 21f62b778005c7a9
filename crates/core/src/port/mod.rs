// Port Layer - Interfaces for external dependencies

pub mod queue_repository;
pub mod time_provider; // For deterministic testing
pub mod user_repository;

// Re-exports
pub use queue_repository::QueueRepository;
pub use time_provider::TimeProvider;
pub use user_repository::UserRepository;
