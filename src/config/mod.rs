use std::env;

use lazy_static::lazy_static;

lazy_static! {
    pub static ref CONFIG: Config = Config::from_env();
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub db_host: String,
    pub db_port: u16,
    pub db_user: String,
    pub db_password: String,
    pub db_name: String,
    pub db_ssl: bool,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        Self {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .expect("SERVER_PORT must be a valid number"),
            db_host: env::var("MARIADB_HOST").unwrap_or_else(|_| "localhost".to_string()),
            db_port: env::var("MARIADB_PORT")
                .unwrap_or_else(|_| "3306".to_string())
                .parse()
                .expect("MARIADB_PORT must be a valid number"),
            db_user: env::var("MARIADB_USER").unwrap_or_else(|_| "root".to_string()),
            db_password: env::var("MARIADB_PASSWORD").unwrap_or_default(),
            db_name: env::var("MARIADB_DATABASE").unwrap_or_else(|_| "users_api".to_string()),
            db_ssl: env::var("MARIADB_SSL")
                .map(|v| v == "true")
                .unwrap_or(false),
        }
    }
}
