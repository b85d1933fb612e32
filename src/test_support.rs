//! In-memory `UserStore` double shared by service and handler tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::errors::ApiError;
use crate::models::User;
use crate::repositories::UserStore;

/// Store backed by a vector, mirroring the MySQL repository's semantics:
/// substring matching is case-insensitive (default collation), the email
/// filter is exact, both combine conjunctively, and rows come back in id
/// order with the offset/limit window applied after filtering.
#[derive(Default)]
pub struct InMemoryUserStore {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rows.
    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn create(&self, name: &str, email: &str) -> Result<User, ApiError> {
        let mut users = self.users.lock().unwrap();
        let user = User {
            id: users.len() as i64 + 1,
            name: name.to_string(),
            email: email.to_string(),
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_all_paginated(
        &self,
        page: u64,
        limit: u64,
        search: Option<&str>,
        email: Option<&str>,
    ) -> Result<(Vec<User>, u64), ApiError> {
        let users = self.users.lock().unwrap();
        let needle = search
            .filter(|s| !s.trim().is_empty())
            .map(|s| s.to_lowercase());
        let email = email.filter(|e| !e.trim().is_empty());

        let matches: Vec<User> = users
            .iter()
            .filter(|u| {
                let search_ok = needle.as_ref().map_or(true, |n| {
                    u.name.to_lowercase().contains(n) || u.email.to_lowercase().contains(n)
                });
                let email_ok = email.map_or(true, |e| u.email == e);
                search_ok && email_ok
            })
            .cloned()
            .collect();

        let total = matches.len() as u64;
        let skip = ((page - 1) * limit) as usize;
        let data = matches
            .into_iter()
            .skip(skip)
            .take(limit as usize)
            .collect();

        Ok((data, total))
    }
}
