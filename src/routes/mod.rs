use actix_web::web;

use crate::handlers;
use crate::models::HealthResponse;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Health check
        .route("/health", web::get().to(health_check))
        // User routes
        .service(
            web::scope("/users")
                // Create a new user
                .route("", web::post().to(handlers::create_user))
                // List users with pagination, search, and filters
                .route("", web::get().to(handlers::list_users)),
        );
}

/// Service liveness probe
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Server is running", body = HealthResponse)
    )
)]
pub async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(HealthResponse {
        status: "OK".to_string(),
        message: "Server is running".to_string(),
    })
}
