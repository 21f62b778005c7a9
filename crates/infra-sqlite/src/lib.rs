// foodq Infrastructure - SQLite Adapter
// Implements: QueueRepository, UserRepository

mod connection;
mod error;
mod migration;
mod queue_repository;
mod user_repository;

pub use connection::create_pool;
pub use migration::run_migrations;
pub use queue_repository::SqliteQueueRepository;
pub use user_repository::SqliteUserRepository;

// Note: sqlx::Error conversion is handled by wrapping in helper functions
// due to Rust's orphan rules (cannot implement From<sqlx::Error> for AppError here)
