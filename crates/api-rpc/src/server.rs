//! JSON-RPC Server
//!
//! Serves the queue methods over HTTP on localhost.

use crate::handler::RpcHandler;
use crate::types::{
    CreateQueueRequest, CreateUserRequest, QueueRequest, RecipeRequest, ReorderRequest,
};
use jsonrpsee::server::{Server, ServerHandle};
use jsonrpsee::RpcModule;
use std::net::SocketAddr;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

pub const DEFAULT_RPC_HOST: &str = "127.0.0.1";
pub const DEFAULT_RPC_PORT: u16 = 9527;

/// RPC Server Configuration
#[derive(Debug, Clone)]
pub struct RpcServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for RpcServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_RPC_HOST.to_string(),
            port: DEFAULT_RPC_PORT,
        }
    }
}

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to register method: {0}")]
    Register(String),
}

/// Running server: bound address plus the handle used to stop it
pub struct RunningServer {
    pub local_addr: SocketAddr,
    pub handle: ServerHandle,
}

/// RPC Server
pub struct RpcServer {
    config: RpcServerConfig,
    handler: Arc<RpcHandler>,
}

impl RpcServer {
    pub fn new(config: RpcServerConfig, handler: Arc<RpcHandler>) -> Self {
        Self { config, handler }
    }

    /// Bind and start serving. Port 0 picks a free port.
    pub async fn start(self) -> Result<RunningServer, ServerError> {
        let addr = format!("{}:{}", self.config.host, self.config.port);

        let server = Server::builder()
            .build(&addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: addr.clone(),
                source,
            })?;
        let local_addr = server.local_addr().map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;

        let module = self.build_module()?;

        info!(addr = %local_addr, "JSON-RPC server started");

        Ok(RunningServer {
            local_addr,
            handle: server.start(module),
        })
    }

    fn build_module(&self) -> Result<RpcModule<()>, ServerError> {
        let mut module = RpcModule::new(());

        let handler = self.handler.clone();
        module
            .register_async_method("queue.list.v1", move |params, _, _| {
                let handler = handler.clone();
                async move {
                    let req: QueueRequest = params.parse()?;
                    handler.list(req).await
                }
            })
            .map_err(|e| ServerError::Register(e.to_string()))?;

        let handler = self.handler.clone();
        module
            .register_async_method("queue.next.v1", move |params, _, _| {
                let handler = handler.clone();
                async move {
                    let req: QueueRequest = params.parse()?;
                    handler.next(req).await
                }
            })
            .map_err(|e| ServerError::Register(e.to_string()))?;

        let handler = self.handler.clone();
        module
            .register_async_method("queue.enqueue.v1", move |params, _, _| {
                let handler = handler.clone();
                async move {
                    let req: RecipeRequest = params.parse()?;
                    handler.enqueue(req).await
                }
            })
            .map_err(|e| ServerError::Register(e.to_string()))?;

        let handler = self.handler.clone();
        module
            .register_async_method("queue.dequeue.v1", move |params, _, _| {
                let handler = handler.clone();
                async move {
                    let req: RecipeRequest = params.parse()?;
                    handler.dequeue(req).await
                }
            })
            .map_err(|e| ServerError::Register(e.to_string()))?;

        let handler = self.handler.clone();
        module
            .register_async_method("queue.reorder.v1", move |params, _, _| {
                let handler = handler.clone();
                async move {
                    let req: ReorderRequest = params.parse()?;
                    handler.reorder(req).await
                }
            })
            .map_err(|e| ServerError::Register(e.to_string()))?;

        let handler = self.handler.clone();
        module
            .register_async_method("queue.create.v1", move |params, _, _| {
                let handler = handler.clone();
                async move {
                    let req: CreateQueueRequest = params.parse()?;
                    handler.create_queue(req).await
                }
            })
            .map_err(|e| ServerError::Register(e.to_string()))?;

        let handler = self.handler.clone();
        module
            .register_async_method("user.create.v1", move |params, _, _| {
                let handler = handler.clone();
                async move {
                    let req: CreateUserRequest = params.parse()?;
                    handler.create_user(req).await
                }
            })
            .map_err(|e| ServerError::Register(e.to_string()))?;

        Ok(module)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::code;
    use foodq_core::application::{OnboardingService, QueueService, RetryPolicy};
    use foodq_core::port::queue_repository::mocks::InMemoryQueueRepository;
    use foodq_core::port::user_repository::mocks::InMemoryUserRepository;
    use jsonrpsee::core::client::{ClientT, Error as ClientError};
    use jsonrpsee::core::params::ObjectParams;
    use jsonrpsee::http_client::HttpClientBuilder;
    use serde_json::Value;

    async fn start_test_server() -> RunningServer {
        let queue_repo = Arc::new(InMemoryQueueRepository::new().with_queue(1, 10, vec![5, 7, 9]));
        let user_repo = Arc::new(InMemoryUserRepository::new());
        let handler = RpcHandler::new(
            Arc::new(QueueService::new(queue_repo.clone(), RetryPolicy::no_retry())),
            Arc::new(OnboardingService::new(user_repo, queue_repo)),
        );

        let config = RpcServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        };
        RpcServer::new(config, Arc::new(handler))
            .start()
            .await
            .unwrap()
    }

    fn params(pairs: &[(&str, Value)]) -> ObjectParams {
        let mut params = ObjectParams::new();
        for (name, value) in pairs {
            params.insert(name, value).unwrap();
        }
        params
    }

    #[tokio::test]
    async fn test_reorder_then_list_over_http() {
        let server = start_test_server().await;
        let client = HttpClientBuilder::default()
            .build(format!("http://{}", server.local_addr))
            .unwrap();

        let _: Value = client
            .request(
                "queue.reorder.v1",
                params(&[
                    ("queue_id", 1.into()),
                    ("recipe_id", 9.into()),
                    ("position", 0.into()),
                ]),
            )
            .await
            .unwrap();
        let listed: Value = client
            .request("queue.list.v1", params(&[("queue_id", 1.into())]))
            .await
            .unwrap();

        assert_eq!(listed["recipes"], serde_json::json!([9, 5, 7]));

        server.handle.stop().unwrap();
    }

    #[tokio::test]
    async fn test_missing_queue_maps_to_not_found_code() {
        let server = start_test_server().await;
        let client = HttpClientBuilder::default()
            .build(format!("http://{}", server.local_addr))
            .unwrap();

        let result: Result<Value, _> = client
            .request("queue.next.v1", params(&[("queue_id", 42.into())]))
            .await;

        match result {
            Err(ClientError::Call(err)) => assert_eq!(err.code(), code::NOT_FOUND),
            other => panic!("expected call error, got {:?}", other),
        }

        server.handle.stop().unwrap();
    }
}
