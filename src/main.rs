mod config;
mod constants;
mod db;
mod errors;
mod handlers;
mod models;
mod openapi;
mod repositories;
mod routes;
mod services;
#[cfg(test)]
mod test_support;
mod utils;
mod validators;

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::CONFIG;
use crate::openapi::ApiDoc;
use crate::repositories::UserRepository;
use crate::services::UserService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment variables and logger
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Connect to MariaDB
    info!("Connecting to MariaDB...");
    let pool = db::connect(&CONFIG)
        .await
        .expect("Failed to connect to MariaDB");

    // Test the connection
    sqlx::query("SELECT 1")
        .execute(&pool)
        .await
        .expect("Failed to ping MariaDB");
    info!("Connected to MariaDB successfully!");

    // Initialize services
    let user_service = web::Data::new(UserService::new(Arc::new(UserRepository::new(pool))));

    // Start HTTP server
    let server_addr = format!("{}:{}", CONFIG.server_host, CONFIG.server_port);
    info!("Starting server at http://{}", server_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(user_service.clone())
            .configure(routes::configure_routes)
            .service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()))
    })
    .bind(&server_addr)?
    .run()
    .await
}
