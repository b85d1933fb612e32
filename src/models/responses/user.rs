//! User-related response models.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::User;

/// User data returned in API responses
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct UserResponse {
    /// User's unique identifier
    #[schema(example = 1)]
    pub id: i64,
    /// User's display name
    #[schema(example = "Jane Doe")]
    pub name: String,
    /// User's email address
    #[schema(example = "jane@example.com")]
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}
