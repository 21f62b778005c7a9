//! foodq SDK - Rust Client Library
//!
//! Typed client for the recipe queue JSON-RPC methods served by `foodq-server`.
//!
//! # Example
//!
//! ```no_run
//! use foodq_sdk::{CreateUserRequest, RecipeQueueClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RecipeQueueClient::connect("http://127.0.0.1:9527").await?;
//!
//!     let user = client.create_user(CreateUserRequest::default()).await?;
//!     let queue = client.create_queue(user.user_id).await?;
//!
//!     client.enqueue(queue.queue_id, 42).await?;
//!     let next = client.next(queue.queue_id).await?;
//!     assert_eq!(next.recipe_id, Some(42));
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::RecipeQueueClient;
pub use error::{code, Result, SdkError};
pub use types::{
    CreateQueueResponse, CreateUserRequest, CreateUserResponse, DequeueResponse,
    EnqueueResponse, ListResponse, NextResponse, QueueId, RecipeId, ReorderResponse, UserId,
};
