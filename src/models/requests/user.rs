//! User-related request models.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// Request payload for creating a user
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    /// User's display name (1-100 characters)
    #[validate(length(
        min = 1,
        max = 100,
        message = "Name must be between 1 and 100 characters"
    ))]
    #[schema(example = "Jane Doe")]
    pub name: String,
    /// User's email address, unique among all users
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "jane@example.com")]
    pub email: String,
}
