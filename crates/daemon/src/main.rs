//! foodq Server - Main Entry Point
//!
//! Composition root: configuration, logging, storage, services, RPC server.

mod config;
mod telemetry;

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

use config::DaemonConfig;
use foodq_api_rpc::{RpcHandler, RpcServer, RpcServerConfig};
use foodq_core::application::{OnboardingService, QueueService, RetryPolicy};
use foodq_core::port::time_provider::SystemTimeProvider;
use foodq_infra_sqlite::{create_pool, run_migrations, SqliteQueueRepository, SqliteUserRepository};

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Configuration and logging
    let config = DaemonConfig::load()?;
    telemetry::init(config.log_format)?;

    info!("foodq server v{} starting...", foodq_core::VERSION);

    // 2. Storage
    if !config.is_in_memory() {
        if let Some(parent) = Path::new(&config.db_path).parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }

    info!(db_path = %config.db_path, "Initializing database...");
    let pool = create_pool(&config.database_url())
        .await
        .context("DB pool creation failed")?;
    run_migrations(&pool).await.context("Migration failed")?;

    // 3. Dependency wiring
    let time_provider = Arc::new(SystemTimeProvider);
    let queue_repo = Arc::new(SqliteQueueRepository::new(
        pool.clone(),
        time_provider.clone(),
    ));
    let user_repo = Arc::new(SqliteUserRepository::new(pool.clone(), time_provider));

    let retry_policy = RetryPolicy::new(config.retry_max_attempts, config.retry_base_delay_ms)
        .with_max_delay(config.retry_max_delay_ms);
    let queues = Arc::new(QueueService::new(queue_repo.clone(), retry_policy));
    let onboarding = Arc::new(OnboardingService::new(user_repo, queue_repo));

    // 4. JSON-RPC server
    let rpc_config = RpcServerConfig {
        host: config.rpc_host.clone(),
        port: config.rpc_port,
    };
    let server = RpcServer::new(rpc_config, Arc::new(RpcHandler::new(queues, onboarding)))
        .start()
        .await
        .context("RPC server start failed")?;

    info!(addr = %server.local_addr, "System ready. Press Ctrl+C to shutdown");

    // 5. Wait for shutdown signal
    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received. Exiting gracefully...");

    if let Err(e) = server.handle.stop() {
        warn!(error = %e, "RPC server was already stopped");
    }
    server.handle.stopped().await;
    pool.close().await;
    telemetry::shutdown();

    info!("Shutdown complete.");
    Ok(())
}
