//! Database module for the MySQL connection pool.

use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions, MySqlSslMode};

use crate::config::Config;
use crate::errors::ApiError;

/// Build a connection pool from the typed configuration.
///
/// The schema is managed outside the application (see `schema.sql`); no
/// migrations run here.
pub async fn connect(config: &Config) -> Result<MySqlPool, ApiError> {
    let options = MySqlConnectOptions::new()
        .host(&config.db_host)
        .port(config.db_port)
        .username(&config.db_user)
        .password(&config.db_password)
        .database(&config.db_name)
        .ssl_mode(if config.db_ssl {
            MySqlSslMode::Required
        } else {
            MySqlSslMode::Preferred
        });

    let pool = MySqlPoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    Ok(pool)
}
