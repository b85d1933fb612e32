//! Pagination constants for the list endpoint.

/// Number of items per page when the request does not specify one.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Upper bound on items per page.
pub const MAX_PAGE_SIZE: u64 = 100;

/// Starting page number.
pub const DEFAULT_PAGE_NUMBER: u64 = 1;
