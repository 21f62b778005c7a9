//! foodq Client Implementation

use crate::error::{Result, SdkError};
use crate::types::{
    CreateQueueRequest, CreateQueueResponse, CreateUserRequest, CreateUserResponse,
    DequeueResponse, EnqueueResponse, ListResponse, NextResponse, QueueId, QueueRequest, RecipeId,
    RecipeRequest, ReorderRequest, ReorderResponse, UserId,
};
use jsonrpsee::core::client::ClientT;
use jsonrpsee::core::params::ObjectParams;
use jsonrpsee::http_client::{HttpClient, HttpClientBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Recipe queue client
///
/// Provides a typed interface to the foodq server.
///
/// # Example
///
/// ```no_run
/// use foodq_sdk::RecipeQueueClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = RecipeQueueClient::connect("http://127.0.0.1:9527").await?;
/// let next = client.next(1).await?;
/// println!("cook next: {:?}", next.recipe_id);
/// # Ok(())
/// # }
/// ```
pub struct RecipeQueueClient {
    client: HttpClient,
}

impl RecipeQueueClient {
    /// Connect to a foodq server
    ///
    /// # Arguments
    ///
    /// * `url` - RPC endpoint URL (e.g., `http://127.0.0.1:9527`)
    pub async fn connect(url: impl AsRef<str>) -> Result<Self> {
        let url = url.as_ref();

        let client = HttpClientBuilder::default()
            .request_timeout(Duration::from_secs(30))
            .build(url)
            .map_err(|e| SdkError::Connection(format!("Failed to create client: {}", e)))?;

        Ok(Self { client })
    }

    /// Ordered recipe ids of a queue
    pub async fn list(&self, queue_id: QueueId) -> Result<ListResponse> {
        self.call("queue.list.v1", &QueueRequest { queue_id }).await
    }

    /// Next recipe to cook; `empty` is set when the queue has none
    pub async fn next(&self, queue_id: QueueId) -> Result<NextResponse> {
        self.call("queue.next.v1", &QueueRequest { queue_id }).await
    }

    /// Append a recipe to the end of the queue
    pub async fn enqueue(&self, queue_id: QueueId, recipe_id: RecipeId) -> Result<EnqueueResponse> {
        self.call(
            "queue.enqueue.v1",
            &RecipeRequest {
                queue_id,
                recipe_id,
            },
        )
        .await
    }

    /// Remove the first occurrence of a recipe
    pub async fn dequeue(&self, queue_id: QueueId, recipe_id: RecipeId) -> Result<DequeueResponse> {
        self.call(
            "queue.dequeue.v1",
            &RecipeRequest {
                queue_id,
                recipe_id,
            },
        )
        .await
    }

    /// Move the first occurrence of a recipe to `position`
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use foodq_sdk::RecipeQueueClient;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = RecipeQueueClient::connect("http://127.0.0.1:9527").await?;
    /// match client.reorder(1, 9, 0).await {
    ///     Ok(_) => println!("moved to the front"),
    ///     Err(e) if e.is_invalid_position() => println!("no such slot"),
    ///     Err(e) => return Err(e.into()),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn reorder(
        &self,
        queue_id: QueueId,
        recipe_id: RecipeId,
        position: i64,
    ) -> Result<ReorderResponse> {
        self.call(
            "queue.reorder.v1",
            &ReorderRequest {
                queue_id,
                recipe_id,
                position,
            },
        )
        .await
    }

    /// Create the queue owned by `user_id`
    pub async fn create_queue(&self, user_id: UserId) -> Result<CreateQueueResponse> {
        self.call("queue.create.v1", &CreateQueueRequest { user_id })
            .await
    }

    /// Register a user
    pub async fn create_user(&self, request: CreateUserRequest) -> Result<CreateUserResponse> {
        self.call("user.create.v1", &request).await
    }

    async fn call<P, R>(&self, method: &str, request: &P) -> Result<R>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        let params = named_params(request)?;
        let response: R = self.client.request(method, params).await?;

        Ok(response)
    }
}

/// Send a request struct as JSON-RPC named parameters
fn named_params<P: Serialize>(request: &P) -> Result<ObjectParams> {
    let serde_json::Value::Object(fields) = serde_json::to_value(request)? else {
        return Err(SdkError::Other(
            "Request must serialize to a JSON object".to_string(),
        ));
    };

    let mut params = ObjectParams::new();
    for (name, value) in fields {
        params.insert(&name, value)?;
    }

    Ok(params)
}
