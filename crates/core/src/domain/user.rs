// User Domain Model (queue owner)

use serde::{Deserialize, Serialize};

/// User identifier (assigned by the store)
pub type UserId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: Option<String>,
    pub email: Option<String>,
    pub subscription: bool,
    pub created_at: i64, // epoch ms
}

/// Onboarding payload for a new user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub subscription: bool,
}
