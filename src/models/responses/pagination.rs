//! Pagination response models.

use serde::Serialize;
use utoipa::ToSchema;

/// Position of a page within the filtered result set.
///
/// Serialized in camelCase to match the public API contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    /// Current page number (1-based)
    pub page: u64,
    /// Items per page
    pub limit: u64,
    /// Total number of matching items across all pages
    pub total: u64,
    /// Total number of pages
    pub total_pages: u64,
    /// Whether a page exists after this one
    pub has_next_page: bool,
    /// Whether a page exists before this one
    pub has_previous_page: bool,
}

/// Paginated list response
#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedResponse<T: Serialize> {
    /// Page of items
    pub data: Vec<T>,
    /// Pagination metadata
    pub meta: PaginationMeta,
}
