//! User handlers for the create and list endpoints.

use actix_web::{web, HttpResponse};
use log::{info, warn};
use validator::Validate;

use crate::constants::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::errors::ApiError;
use crate::models::{CreateUserRequest, UserResponse};
use crate::services::UserService;
use crate::validators::validation_errors_to_api_error;

/// Create a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Validation error", body = crate::models::ErrorResponse),
        (status = 409, description = "Email already in use", body = crate::models::ErrorResponse)
    )
)]
pub async fn create_user(
    user_service: web::Data<UserService>,
    body: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, ApiError> {
    body.validate().map_err(|e| {
        warn!("Validation failed for create user: {}", e);
        validation_errors_to_api_error(e)
    })?;

    let user = user_service.create_user(body.into_inner()).await?;

    info!("Successfully created user: {}", user.id);
    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

/// List users with pagination and optional filters
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)"),
        ("search" = Option<String>, Query, description = "Substring match against name or email"),
        ("email" = Option<String>, Query, description = "Exact email filter")
    ),
    responses(
        (status = 200, description = "Page of users", body = crate::models::PaginatedResponse<UserResponse>)
    )
)]
pub async fn list_users(
    user_service: web::Data<UserService>,
    query: web::Query<ListUsersQuery>,
) -> Result<HttpResponse, ApiError> {
    let page = query.page.unwrap_or(DEFAULT_PAGE_NUMBER).max(1);
    let limit = query.limit.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE);

    let response = user_service
        .list_users(page, limit, query.search.as_deref(), query.email.as_deref())
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

/// Query parameters for listing users with pagination, search, and filtering
#[derive(Debug, serde::Deserialize)]
pub struct ListUsersQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    /// Substring match against name or email
    pub search: Option<String>,
    /// Exact email filter, combined with `search` when both are present
    pub email: Option<String>,
}
