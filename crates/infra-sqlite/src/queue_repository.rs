// SQLite QueueRepository Implementation

use crate::error::map_sqlx_error;
use async_trait::async_trait;
use foodq_core::domain::{Queue, QueueId, RecipeId, UserId};
use foodq_core::error::{AppError, Result};
use foodq_core::port::{QueueRepository, TimeProvider};
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::debug;

pub struct SqliteQueueRepository {
    pool: SqlitePool,
    time_provider: Arc<dyn TimeProvider>,
}

impl SqliteQueueRepository {
    pub fn new(pool: SqlitePool, time_provider: Arc<dyn TimeProvider>) -> Self {
        Self {
            pool,
            time_provider,
        }
    }
}

#[async_trait]
impl QueueRepository for SqliteQueueRepository {
    async fn create(&self, user_id: UserId) -> Result<Queue> {
        let now = self.time_provider.now_millis();

        let id: QueueId = sqlx::query_scalar(
            r#"
            INSERT INTO queues (user_id, recipes, version, created_at, updated_at)
            VALUES (?, '[]', 0, ?, ?)
            RETURNING id
            "#,
        )
        .bind(user_id)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_foreign_key_violation() {
                    return AppError::NotFound(format!("User {} not found", user_id));
                }
                if db_err.is_unique_violation() {
                    return AppError::Conflict(format!("User {} already has a queue", user_id));
                }
            }
            map_sqlx_error(e)
        })?;

        Ok(Queue::new(id, user_id, now))
    }

    async fn fetch(&self, id: QueueId) -> Result<Queue> {
        let row = sqlx::query_as::<_, QueueRow>(
            "SELECT id, user_id, recipes, version, created_at, updated_at FROM queues WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        match row {
            Some(row) => row.into_queue(),
            None => Err(AppError::NotFound(format!("Queue {} not found", id))),
        }
    }

    async fn replace(
        &self,
        id: QueueId,
        recipes: &[RecipeId],
        expected_version: i64,
    ) -> Result<()> {
        let now = self.time_provider.now_millis();
        let recipes_json = serde_json::to_string(recipes)?;

        // Version check, overwrite and bump in one statement
        let result = sqlx::query(
            r#"
            UPDATE queues
            SET recipes = ?, version = version + 1, updated_at = ?
            WHERE id = ? AND version = ?
            "#,
        )
        .bind(&recipes_json)
        .bind(now)
        .bind(id)
        .bind(expected_version)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        if result.rows_affected() == 1 {
            debug!(queue_id = %id, version = expected_version + 1, "Queue replaced");
            return Ok(());
        }

        // Queue might not exist or was replaced by someone else
        let current: Option<i64> = sqlx::query_scalar("SELECT version FROM queues WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        match current {
            None => Err(AppError::NotFound(format!("Queue {} not found", id))),
            Some(version) => Err(AppError::Conflict(format!(
                "Queue {} is at version {}, expected {}",
                id, version, expected_version
            ))),
        }
    }
}

/// SQLite row representation
#[derive(Debug, sqlx::FromRow)]
struct QueueRow {
    id: i64,
    user_id: i64,
    recipes: String, // JSON array
    version: i64,
    created_at: i64,
    updated_at: i64,
}

impl QueueRow {
    fn into_queue(self) -> Result<Queue> {
        // Deterministic fault: not retryable
        let recipes: Vec<RecipeId> = serde_json::from_str(&self.recipes).map_err(|e| {
            AppError::Internal(format!("Queue {} has a corrupt recipe list: {}", self.id, e))
        })?;

        Ok(Queue {
            id: self.id,
            user_id: self.user_id,
            recipes,
            created_at: self.created_at,
            updated_at: self.updated_at,
            version: self.version,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_pool, run_migrations, SqliteUserRepository};
    use foodq_core::domain::NewUser;
    use foodq_core::port::time_provider::ManualTimeProvider;
    use foodq_core::port::UserRepository;

    async fn setup_test_db() -> (SqlitePool, Arc<ManualTimeProvider>, UserId) {
        let pool = create_pool("sqlite::memory:").await.unwrap();
        run_migrations(&pool).await.unwrap();
        let time_provider = Arc::new(ManualTimeProvider::new(1_000));

        let users = SqliteUserRepository::new(pool.clone(), time_provider.clone());
        let user = users.insert(&NewUser::default()).await.unwrap();

        (pool, time_provider, user.id)
    }

    #[tokio::test]
    async fn test_create_and_fetch_empty_queue() {
        let (pool, time_provider, user_id) = setup_test_db().await;
        let repo = SqliteQueueRepository::new(pool, time_provider);

        let created = repo.create(user_id).await.unwrap();
        let fetched = repo.fetch(created.id).await.unwrap();

        assert_eq!(fetched, created);
        assert!(fetched.recipes.is_empty());
        assert_eq!(fetched.created_at, 1_000);
    }

    #[tokio::test]
    async fn test_fetch_missing_queue() {
        let (pool, time_provider, _) = setup_test_db().await;
        let repo = SqliteQueueRepository::new(pool, time_provider);

        assert!(matches!(repo.fetch(404).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_replace_preserves_order_and_duplicates() {
        let (pool, time_provider, user_id) = setup_test_db().await;
        let repo = SqliteQueueRepository::new(pool, time_provider.clone());
        let queue = repo.create(user_id).await.unwrap();

        time_provider.advance(500);
        repo.replace(queue.id, &[9, 0, 5, 9], 0).await.unwrap();

        let fetched = repo.fetch(queue.id).await.unwrap();
        assert_eq!(fetched.recipes, vec![9, 0, 5, 9]);
        assert_eq!(fetched.version, 1);
        assert_eq!(fetched.created_at, 1_000);
        assert_eq!(fetched.updated_at, 1_500);
    }

    #[tokio::test]
    async fn test_replace_with_stale_version_conflicts() {
        let (pool, time_provider, user_id) = setup_test_db().await;
        let repo = SqliteQueueRepository::new(pool, time_provider);
        let queue = repo.create(user_id).await.unwrap();

        repo.replace(queue.id, &[1], 0).await.unwrap();
        let err = repo.replace(queue.id, &[2], 0).await.unwrap_err();

        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(repo.fetch(queue.id).await.unwrap().recipes, vec![1]);
    }

    #[tokio::test]
    async fn test_replace_missing_queue() {
        let (pool, time_provider, _) = setup_test_db().await;
        let repo = SqliteQueueRepository::new(pool, time_provider);

        let err = repo.replace(77, &[1], 0).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_create_for_unknown_user() {
        let (pool, time_provider, _) = setup_test_db().await;
        let repo = SqliteQueueRepository::new(pool, time_provider);

        let err = repo.create(12345).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_one_queue_per_user() {
        let (pool, time_provider, user_id) = setup_test_db().await;
        let repo = SqliteQueueRepository::new(pool, time_provider);

        repo.create(user_id).await.unwrap();
        let err = repo.create(user_id).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_corrupt_recipe_list_is_reported() {
        let (pool, time_provider, user_id) = setup_test_db().await;
        let repo = SqliteQueueRepository::new(pool.clone(), time_provider);
        let queue = repo.create(user_id).await.unwrap();

        sqlx::query("UPDATE queues SET recipes = 'not json' WHERE id = ?")
            .bind(queue.id)
            .execute(&pool)
            .await
            .unwrap();

        let err = repo.fetch(queue.id).await.unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
        assert!(!err.is_retryable());
    }
}
