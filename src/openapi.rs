use utoipa::OpenApi;

use crate::models::{
    CreateUserRequest, ErrorResponse, HealthResponse, PaginatedResponse, PaginationMeta,
    UserResponse,
};

/// OpenAPI documentation for the Users API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Users API",
        version = "1.0.0",
        description = "A REST API for creating and listing users with search and pagination.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Users", description = "User management endpoints")
    ),
    paths(
        crate::handlers::create_user,
        crate::handlers::list_users,
        crate::routes::health_check
    ),
    components(
        schemas(
            CreateUserRequest,
            UserResponse,
            PaginationMeta,
            PaginatedResponse<UserResponse>,
            ErrorResponse,
            HealthResponse
        )
    )
)]
pub struct ApiDoc;
