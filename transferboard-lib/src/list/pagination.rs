//! Pagination display helpers.

/// Returns the number of pages needed for `total` rows.
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Formats the `"<from>-<to> of <total>"` range shown under a table.
///
/// `from`/`to` are one-based and clamped to `total`; an empty result reads
/// `"0-0 of 0"`.
pub fn pagination_label(page: usize, page_size: usize, total: usize) -> String {
    let offset = page.saturating_mul(page_size);
    if total == 0 || offset >= total {
        return format!("0-0 of {}", total);
    }
    let to = offset.saturating_add(page_size).min(total);
    format!("{}-{} of {}", offset + 1, to, total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(37, 25), 2);
        assert_eq!(page_count(50, 25), 2);
        assert_eq!(page_count(51, 25), 3);
    }

    #[test]
    fn test_label_partial_last_page() {
        assert_eq!(pagination_label(1, 25, 37), "26-37 of 37");
        assert_eq!(pagination_label(0, 10, 37), "1-10 of 37");
    }

    #[test]
    fn test_label_empty_or_past_end() {
        assert_eq!(pagination_label(0, 10, 0), "0-0 of 0");
        assert_eq!(pagination_label(9, 100, 37), "0-0 of 37");
    }

    #[test]
    fn test_label_huge_page_reads_past_end() {
        assert_eq!(pagination_label(usize::MAX / 5, 10, 37), "0-0 of 37");
        assert_eq!(pagination_label(0, usize::MAX, 37), "1-37 of 37");
    }
}
