// SQLite UserRepository Implementation

use crate::error::map_sqlx_error;
use async_trait::async_trait;
use foodq_core::domain::{NewUser, User, UserId};
use foodq_core::error::Result;
use foodq_core::port::{TimeProvider, UserRepository};
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct SqliteUserRepository {
    pool: SqlitePool,
    time_provider: Arc<dyn TimeProvider>,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool, time_provider: Arc<dyn TimeProvider>) -> Self {
        Self {
            pool,
            time_provider,
        }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn insert(&self, user: &NewUser) -> Result<User> {
        let now = self.time_provider.now_millis();

        let id: UserId = sqlx::query_scalar(
            r#"
            INSERT INTO users (name, email, subscription, created_at)
            VALUES (?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(user.subscription)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(User {
            id,
            name: user.name.clone(),
            email: user.email.clone(),
            subscription: user.subscription,
            created_at: now,
        })
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, name, email, subscription, created_at FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(UserRow::into_user))
    }
}

/// SQLite row representation
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: i64,
    name: Option<String>,
    email: Option<String>,
    subscription: bool,
    created_at: i64,
}

impl UserRow {
    fn into_user(self) -> User {
        User {
            id: self.id,
            name: self.name,
            email: self.email,
            subscription: self.subscription,
            created_at: self.created_at,
        }
    }
}
