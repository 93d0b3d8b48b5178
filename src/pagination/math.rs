//! Pure page arithmetic shared by the engine and the CLI.

use std::ops::Range;

/// Page size used when the caller does not pick one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Floor a requested page size at 1.
pub fn normalize_page_size(size: i64) -> usize {
    usize::try_from(size.max(1)).unwrap_or(usize::MAX)
}

/// Compute the number of pages for a collection.
///
/// An empty collection has zero pages.
pub fn total_pages(item_count: usize, page_size: usize) -> usize {
    item_count.div_ceil(page_size.max(1))
}

/// Clamp a requested page into `[1, max(1, total_pages)]`.
pub fn clamp_page(page: i64, total_pages: usize) -> usize {
    let upper = total_pages.max(1);
    if page < 1 {
        return 1;
    }
    usize::try_from(page).map_or(upper, |page| page.min(upper))
}

/// Return the index range of a one-based page.
///
/// The range is empty when the page starts past the end of the collection.
pub fn page_window(total_items: usize, page_size: usize, page: usize) -> Range<usize> {
    let page_size = page_size.max(1);
    let start = page
        .saturating_sub(1)
        .saturating_mul(page_size)
        .min(total_items);
    let end = start.saturating_add(page_size).min(total_items);
    start..end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(25, 10), 3);
        assert_eq!(total_pages(25, 0), 25);
    }

    #[test]
    fn test_clamp_page_saturates() {
        assert_eq!(clamp_page(-4, 3), 1);
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(2, 3), 2);
        assert_eq!(clamp_page(99, 3), 3);
        assert_eq!(clamp_page(7, 0), 1);
        assert_eq!(clamp_page(i64::MAX, 5), 5);
    }

    #[test]
    fn test_page_window_bounds() {
        assert_eq!(page_window(25, 10, 1), 0..10);
        assert_eq!(page_window(25, 10, 3), 20..25);
        assert_eq!(page_window(25, 10, 4), 25..25);
        assert_eq!(page_window(0, 10, 1), 0..0);
        assert_eq!(page_window(5, 10, usize::MAX), 5..5);
    }

    #[test]
    fn test_normalize_page_size() {
        assert_eq!(normalize_page_size(-3), 1);
        assert_eq!(normalize_page_size(0), 1);
        assert_eq!(normalize_page_size(25), 25);
    }
}
