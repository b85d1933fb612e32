//! Repository layer for database operations.
//!
//! Separates business logic (services) from database access, with the
//! `UserStore` trait as the seam for test doubles.

pub mod user_repository;

pub use user_repository::{UserRepository, UserStore};
