//! Page arithmetic over the active set. Pages are 1-based.

/// Rows per page.
pub const PAGE_SIZE: usize = 10;

/// Number of pages needed for `len` rows. Never less than one, so an empty
/// table still reads "page 1 of 1".
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    len.div_ceil(page_size).max(1)
}

/// The rows of page `page`, clipped to `items`. Out-of-range pages are empty.
pub fn visible_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Pull `page` back into `1..=total_pages(len, page_size)`.
pub fn clamp_page(page: usize, len: usize, page_size: usize) -> usize {
    page.clamp(1, total_pages(len, page_size))
}

/// Whether a page-change request may be honoured.
pub fn is_valid_page(page: usize, len: usize, page_size: usize) -> bool {
    (1..=total_pages(len, page_size)).contains(&page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(25, 10), 3);
        for n in 0..200 {
            assert_eq!(total_pages(n, 10), std::cmp::max(1, n.div_ceil(10)));
        }
    }

    #[test]
    fn test_visible_slice_bounds() {
        let items: Vec<u32> = (1..=25).collect();
        assert_eq!(visible_slice(&items, 1, 10), &items[0..10]);
        assert_eq!(visible_slice(&items, 3, 10), &[21, 22, 23, 24, 25]);
        assert!(visible_slice(&items, 4, 10).is_empty());
        assert!(visible_slice(&items, 0, 10).is_empty());
        assert!(visible_slice(&items, usize::MAX, 10).is_empty());
        assert!(visible_slice::<u32>(&[], 1, 10).is_empty());
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(3, 10, 10), 1);
        assert_eq!(clamp_page(0, 10, 10), 1);
        assert_eq!(clamp_page(2, 25, 10), 2);
        assert_eq!(clamp_page(9, 0, 10), 1);
    }

    #[test]
    fn test_is_valid_page() {
        assert!(is_valid_page(1, 0, 10));
        assert!(is_valid_page(3, 25, 10));
        assert!(!is_valid_page(4, 25, 10));
        assert!(!is_valid_page(0, 25, 10));
    }
}
