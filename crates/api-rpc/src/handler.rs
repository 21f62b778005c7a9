//! RPC Method Handlers
//!
//! Translates wire types into service calls and service errors into RPC errors.

use crate::error::to_rpc_error;
use crate::types::{
    CreateQueueRequest, CreateQueueResponse, CreateUserRequest, CreateUserResponse,
    DequeueResponse, EnqueueResponse, ListResponse, NextResponse, QueueRequest, RecipeRequest,
    ReorderRequest, ReorderResponse,
};
use foodq_core::application::{OnboardingService, QueueService};
use foodq_core::domain::{NewUser, RecipePosition};
use jsonrpsee::types::ErrorObjectOwned;
use std::sync::Arc;

/// RPC Handler with injected services
pub struct RpcHandler {
    queues: Arc<QueueService>,
    onboarding: Arc<OnboardingService>,
}

impl RpcHandler {
    pub fn new(queues: Arc<QueueService>, onboarding: Arc<OnboardingService>) -> Self {
        Self { queues, onboarding }
    }

    /// queue.list.v1
    pub async fn list(&self, params: QueueRequest) -> Result<ListResponse, ErrorObjectOwned> {
        let recipes = self
            .queues
            .list(params.queue_id)
            .await
            .map_err(to_rpc_error)?;

        Ok(ListResponse {
            queue_id: params.queue_id,
            recipes,
        })
    }

    /// queue.next.v1
    pub async fn next(&self, params: QueueRequest) -> Result<NextResponse, ErrorObjectOwned> {
        let recipe_id = self
            .queues
            .next(params.queue_id)
            .await
            .map_err(to_rpc_error)?;

        Ok(NextResponse {
            queue_id: params.queue_id,
            recipe_id,
            empty: recipe_id.is_none(),
        })
    }

    /// queue.enqueue.v1
    pub async fn enqueue(
        &self,
        params: RecipeRequest,
    ) -> Result<EnqueueResponse, ErrorObjectOwned> {
        let length = self
            .queues
            .enqueue(params.queue_id, params.recipe_id)
            .await
            .map_err(to_rpc_error)?;

        Ok(EnqueueResponse {
            queue_id: params.queue_id,
            recipe_id: params.recipe_id,
            length,
        })
    }

    /// queue.dequeue.v1
    pub async fn dequeue(
        &self,
        params: RecipeRequest,
    ) -> Result<DequeueResponse, ErrorObjectOwned> {
        self.queues
            .dequeue(params.queue_id, params.recipe_id)
            .await
            .map_err(to_rpc_error)?;

        Ok(DequeueResponse {
            queue_id: params.queue_id,
            recipe_id: params.recipe_id,
            removed: true,
        })
    }

    /// queue.reorder.v1
    pub async fn reorder(
        &self,
        params: ReorderRequest,
    ) -> Result<ReorderResponse, ErrorObjectOwned> {
        self.queues
            .reorder(
                params.queue_id,
                RecipePosition::new(params.recipe_id, params.position),
            )
            .await
            .map_err(to_rpc_error)?;

        Ok(ReorderResponse {
            queue_id: params.queue_id,
            recipe_id: params.recipe_id,
            position: params.position,
        })
    }

    /// queue.create.v1
    pub async fn create_queue(
        &self,
        params: CreateQueueRequest,
    ) -> Result<CreateQueueResponse, ErrorObjectOwned> {
        let queue = self
            .onboarding
            .create_queue(params.user_id)
            .await
            .map_err(to_rpc_error)?;

        Ok(CreateQueueResponse {
            queue_id: queue.id,
            user_id: queue.user_id,
            created_at: queue.created_at,
        })
    }

    /// user.create.v1
    pub async fn create_user(
        &self,
        params: CreateUserRequest,
    ) -> Result<CreateUserResponse, ErrorObjectOwned> {
        let user = self
            .onboarding
            .create_user(NewUser {
                name: params.name,
                email: params.email,
                subscription: params.subscription,
            })
            .await
            .map_err(to_rpc_error)?;

        Ok(CreateUserResponse { user_id: user.id })
    }
}
