//! Error message constants used throughout the application.

// User errors
pub const ERR_EMAIL_EXISTS: &str = "Email already in use";
