//! User repository for all MySQL operations on the `users` table.
//!
//! Database access goes through the `UserStore` trait so the service layer
//! can run against an in-memory double in tests.

use async_trait::async_trait;
use log::debug;
use sqlx::MySqlPool;

use crate::errors::ApiError;
use crate::models::User;

/// Data-access interface for user rows.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new user and return it with its assigned id.
    ///
    /// Uniqueness is not checked here; a violated constraint surfaces as a
    /// store error.
    async fn create(&self, name: &str, email: &str) -> Result<User, ApiError>;

    /// Exact-match lookup by email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError>;

    /// Fetch one page of users matching the optional filters, together with
    /// the total match count across all pages.
    async fn find_all_paginated(
        &self,
        page: u64,
        limit: u64,
        search: Option<&str>,
        email: Option<&str>,
    ) -> Result<(Vec<User>, u64), ApiError>;
}

/// MySQL-backed repository for user rows.
pub struct UserRepository {
    pool: MySqlPool,
}

impl UserRepository {
    /// Create a new UserRepository instance.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

/// Build the WHERE clause shared by the page query and the count query.
///
/// `search` matches name or email as an unanchored substring (case
/// sensitivity follows the column collation); `email` requires exact
/// equality. Both clauses combine conjunctively. Blank values count as
/// absent. Wildcards in the search needle are bound as-is.
fn build_filter(search: Option<&str>, email: Option<&str>) -> (String, Vec<String>) {
    let mut sql = String::from(" WHERE 1=1");
    let mut binds: Vec<String> = Vec::new();

    if let Some(search) = search.filter(|s| !s.trim().is_empty()) {
        sql.push_str(" AND (name LIKE ? OR email LIKE ?)");
        let pattern = format!("%{}%", search);
        binds.push(pattern.clone());
        binds.push(pattern);
    }

    if let Some(email) = email.filter(|e| !e.trim().is_empty()) {
        sql.push_str(" AND email = ?");
        binds.push(email.to_string());
    }

    (sql, binds)
}

#[async_trait]
impl UserStore for UserRepository {
    async fn create(&self, name: &str, email: &str) -> Result<User, ApiError> {
        debug!("Repository: Inserting user with email: {}", email);

        let result = sqlx::query("INSERT INTO users (name, email) VALUES (?, ?)")
            .bind(name)
            .bind(email)
            .execute(&self.pool)
            .await?;

        Ok(User {
            id: result.last_insert_id() as i64,
            name: name.to_string(),
            email: email.to_string(),
        })
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        debug!("Repository: Finding user by email: {}", email);

        let user = sqlx::query_as::<_, User>("SELECT id, name, email FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    async fn find_all_paginated(
        &self,
        page: u64,
        limit: u64,
        search: Option<&str>,
        email: Option<&str>,
    ) -> Result<(Vec<User>, u64), ApiError> {
        let (filter, binds) = build_filter(search, email);
        debug!("Repository: Listing users with filter:{}", filter);

        // Total across all pages, ignoring the window.
        let count_sql = format!("SELECT COUNT(*) FROM users{}", filter);
        let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
        for value in &binds {
            count_query = count_query.bind(value);
        }
        let total = count_query.fetch_one(&self.pool).await? as u64;

        // Fixed id order keeps pages reproducible.
        let data_sql = format!(
            "SELECT id, name, email FROM users{} ORDER BY id ASC LIMIT ? OFFSET ?",
            filter
        );
        let skip = (page - 1) * limit;
        let mut data_query = sqlx::query_as::<_, User>(&data_sql);
        for value in &binds {
            data_query = data_query.bind(value);
        }
        let users = data_query
            .bind(limit)
            .bind(skip)
            .fetch_all(&self.pool)
            .await?;

        Ok((users, total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_without_filters() {
        let (sql, binds) = build_filter(None, None);
        assert_eq!(sql, " WHERE 1=1");
        assert!(binds.is_empty());
    }

    #[test]
    fn test_build_filter_search_matches_name_or_email() {
        let (sql, binds) = build_filter(Some("ann"), None);
        assert_eq!(sql, " WHERE 1=1 AND (name LIKE ? OR email LIKE ?)");
        assert_eq!(binds, vec!["%ann%", "%ann%"]);
    }

    #[test]
    fn test_build_filter_email_is_exact() {
        let (sql, binds) = build_filter(None, Some("ann@x.com"));
        assert_eq!(sql, " WHERE 1=1 AND email = ?");
        assert_eq!(binds, vec!["ann@x.com"]);
    }

    #[test]
    fn test_build_filter_combines_conjunctively() {
        let (sql, binds) = build_filter(Some("ann"), Some("bob@x.com"));
        assert_eq!(
            sql,
            " WHERE 1=1 AND (name LIKE ? OR email LIKE ?) AND email = ?"
        );
        assert_eq!(binds, vec!["%ann%", "%ann%", "bob@x.com"]);
    }

    #[test]
    fn test_build_filter_ignores_blank_values() {
        let (sql, binds) = build_filter(Some("   "), Some(""));
        assert_eq!(sql, " WHERE 1=1");
        assert!(binds.is_empty());
    }
}
