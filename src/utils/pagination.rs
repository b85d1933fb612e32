//! Pagination metadata computation.

use crate::models::PaginationMeta;

/// Compute pagination metadata from the request window and the total number
/// of matching rows across all pages.
///
/// `total_pages` is at least 1, even for an empty result set or a zero
/// `limit`, so the division never sees a zero divisor.
pub fn compute_meta(page: u64, limit: u64, total: u64) -> PaginationMeta {
    let total_pages = if total > 0 && limit > 0 {
        total.div_ceil(limit)
    } else {
        1
    };

    PaginationMeta {
        page,
        limit,
        total,
        total_pages,
        has_next_page: page < total_pages,
        has_previous_page: page > 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(compute_meta(1, 10, 25).total_pages, 3);
        assert_eq!(compute_meta(1, 10, 30).total_pages, 3);
        assert_eq!(compute_meta(1, 3, 7).total_pages, 3);
        assert_eq!(compute_meta(1, 1, 1).total_pages, 1);
    }

    #[test]
    fn test_empty_result_set_has_one_page() {
        let meta = compute_meta(1, 10, 0);
        assert_eq!(meta.total_pages, 1);
        assert!(!meta.has_next_page);
        assert!(!meta.has_previous_page);
    }

    #[test]
    fn test_zero_limit_does_not_divide() {
        let meta = compute_meta(1, 0, 50);
        assert_eq!(meta.total_pages, 1);
        assert!(!meta.has_next_page);
    }

    #[test]
    fn test_has_next_page_iff_pages_remain() {
        assert!(compute_meta(1, 10, 35).has_next_page);
        assert!(compute_meta(3, 10, 35).has_next_page);
        assert!(!compute_meta(4, 10, 35).has_next_page);
        assert!(!compute_meta(5, 10, 35).has_next_page);
    }

    #[test]
    fn test_has_previous_page_iff_past_first() {
        assert!(!compute_meta(1, 10, 35).has_previous_page);
        assert!(compute_meta(2, 10, 35).has_previous_page);
        assert!(compute_meta(4, 10, 35).has_previous_page);
    }

    #[test]
    fn test_inputs_copied_verbatim() {
        let meta = compute_meta(2, 20, 55);
        assert_eq!(meta.page, 2);
        assert_eq!(meta.limit, 20);
        assert_eq!(meta.total, 55);
    }
}
