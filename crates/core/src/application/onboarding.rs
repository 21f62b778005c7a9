// Onboarding - create users and their (single) recipe queue

use crate::domain::{NewUser, Queue, User, UserId};
use crate::error::{AppError, Result};
use crate::port::{QueueRepository, UserRepository};
use std::sync::Arc;
use tracing::info;

pub struct OnboardingService {
    user_repo: Arc<dyn UserRepository>,
    queue_repo: Arc<dyn QueueRepository>,
}

impl OnboardingService {
    pub fn new(user_repo: Arc<dyn UserRepository>, queue_repo: Arc<dyn QueueRepository>) -> Self {
        Self {
            user_repo,
            queue_repo,
        }
    }

    /// Register a user. Blank name/email are stored as absent.
    pub async fn create_user(&self, user: NewUser) -> Result<User> {
        let user = NewUser {
            name: non_blank(user.name),
            email: non_blank(user.email),
            subscription: user.subscription,
        };

        if let Some(email) = &user.email {
            if !email.contains('@') {
                return Err(AppError::Validation(format!(
                    "Invalid email address: {}",
                    email
                )));
            }
        }

        let created = self.user_repo.insert(&user).await?;
        info!(user_id = %created.id, "User created");
        Ok(created)
    }

    /// Create the empty queue for an existing user
    pub async fn create_queue(&self, user_id: UserId) -> Result<Queue> {
        if user_id <= 0 {
            return Err(AppError::Validation(format!(
                "User id must be positive, got {}",
                user_id
            )));
        }

        if self.user_repo.find_by_id(user_id).await?.is_none() {
            return Err(AppError::NotFound(format!("User {} not found", user_id)));
        }

        let queue = self.queue_repo.create(user_id).await?;
        info!(queue_id = %queue.id, user_id = %user_id, "Queue created");
        Ok(queue)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::queue_repository::mocks::InMemoryQueueRepository;
    use crate::port::user_repository::mocks::InMemoryUserRepository;

    fn service() -> OnboardingService {
        OnboardingService::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryQueueRepository::new()),
        )
    }

    #[tokio::test]
    async fn test_blank_fields_become_absent() {
        let service = service();
        let user = service
            .create_user(NewUser {
                name: Some("   ".to_string()),
                email: None,
                subscription: true,
            })
            .await
            .unwrap();

        assert_eq!(user.name, None);
        assert_eq!(user.email, None);
        assert!(user.subscription);
    }

    #[tokio::test]
    async fn test_rejects_malformed_email() {
        let service = service();
        let err = service
            .create_user(NewUser {
                name: Some("Ada".to_string()),
                email: Some("not-an-email".to_string()),
                subscription: false,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_queue_for_unknown_user_is_not_found() {
        let service = service();
        let err = service.create_queue(7).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_new_queue_is_empty() {
        let service = service();
        let user = service.create_user(NewUser::default()).await.unwrap();

        let queue = service.create_queue(user.id).await.unwrap();

        assert_eq!(queue.user_id, user.id);
        assert!(queue.is_empty());
        assert_eq!(queue.version, 0);
    }
}
