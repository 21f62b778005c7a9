//! Simple SDK Example
//!
//! # Usage
//!
//! 1. Start the server:
//!    ```bash
//!    cargo run --package foodq-daemon
//!    ```
//!
//! 2. Run this example:
//!    ```bash
//!    cargo run --package foodq-sdk --example simple
//!    ```

use foodq_sdk::{CreateUserRequest, RecipeQueueClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = RecipeQueueClient::connect("http://127.0.0.1:9527").await?;

    let user = client
        .create_user(CreateUserRequest {
            name: Some("Julia".to_string()),
            email: Some("julia@example.com".to_string()),
            subscription: true,
        })
        .await?;
    let queue = client.create_queue(user.user_id).await?;
    println!("Created queue {} for user {}", queue.queue_id, user.user_id);

    for recipe in [5, 7, 9] {
        client.enqueue(queue.queue_id, recipe).await?;
    }
    client.reorder(queue.queue_id, 9, 0).await?;
    client.dequeue(queue.queue_id, 7).await?;

    let listed = client.list(queue.queue_id).await?;
    println!("Queue: {:?}", listed.recipes);

    let next = client.next(queue.queue_id).await?;
    match next.recipe_id {
        Some(recipe) => println!("Cook next: {}", recipe),
        None => println!("Nothing queued"),
    }

    Ok(())
}
