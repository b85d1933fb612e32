use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User row stored in the `users` table.
#[derive(Debug, Serialize, Deserialize, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}
