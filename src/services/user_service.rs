//! User service for the create and list operations.

use std::sync::Arc;

use log::{debug, info};

use crate::constants::ERR_EMAIL_EXISTS;
use crate::errors::ApiError;
use crate::models::{CreateUserRequest, PaginatedResponse, User, UserResponse};
use crate::repositories::UserStore;
use crate::utils::pagination::compute_meta;

pub struct UserService {
    store: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Create a new user, rejecting emails that are already registered.
    ///
    /// The lookup and the insert are not transactional; the unique index on
    /// `email` is the backstop for concurrent creates.
    pub async fn create_user(&self, req: CreateUserRequest) -> Result<User, ApiError> {
        // Check if the email is already taken
        if self.store.find_by_email(&req.email).await?.is_some() {
            return Err(ApiError::Conflict(ERR_EMAIL_EXISTS.to_string()));
        }

        let user = self.store.create(&req.name, &req.email).await?;

        info!("Created user {} ({})", user.id, user.email);
        Ok(user)
    }

    /// Fetch one page of users and attach pagination metadata.
    pub async fn list_users(
        &self,
        page: u64,
        limit: u64,
        search: Option<&str>,
        email: Option<&str>,
    ) -> Result<PaginatedResponse<UserResponse>, ApiError> {
        debug!("Fetching users page={} limit={}", page, limit);

        let (users, total) = self
            .store
            .find_all_paginated(page, limit, search, email)
            .await?;

        let data: Vec<UserResponse> = users.into_iter().map(|u| u.into()).collect();
        let meta = compute_meta(page, limit, total);

        Ok(PaginatedResponse { data, meta })
    }
}
