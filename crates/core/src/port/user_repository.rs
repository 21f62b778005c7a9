// User Repository Port (Interface)

use crate::domain::{NewUser, User, UserId};
use crate::error::Result;
use async_trait::async_trait;

/// Persistence for queue owners (onboarding only)
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user and return it with its assigned id
    async fn insert(&self, user: &NewUser) -> Result<User>;

    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::sync::Mutex;

    /// In-memory UserRepository
    #[derive(Default)]
    pub struct InMemoryUserRepository {
        users: Mutex<Vec<User>>,
    }

    impl InMemoryUserRepository {
        pub fn new() -> Self {
            Self::default()
        }
    }

    #[async_trait]
    impl UserRepository for InMemoryUserRepository {
        async fn insert(&self, user: &NewUser) -> Result<User> {
            let mut users = self.users.lock().unwrap();
            let created = User {
                id: users.len() as UserId + 1,
                name: user.name.clone(),
                email: user.email.clone(),
                subscription: user.subscription,
                created_at: 0,
            };
            users.push(created.clone());
            Ok(created)
        }

        async fn find_by_id(&self, id: UserId) -> Result<Option<User>> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.id == id)
                .cloned())
        }
    }
}
