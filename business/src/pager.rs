//! Client-side pagination over an in-memory row set.
//!
//! The pager never fails: page numbers outside `[1, total_pages]` are clamped
//! to the nearest boundary page, and an empty row set still has one (empty)
//! page.

use std::num::NonZeroUsize;

/// One visible page of a row set.
#[derive(Debug, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// Rows visible on this page, in source order.
    pub rows: &'a [T],
    /// 1-based page number after clamping.
    pub page_number: usize,
    /// Always at least 1.
    pub total_pages: usize,
    /// Index of the first visible row in the full set.
    pub start_index: usize,
    /// Exclusive end index of the visible rows in the full set.
    pub end_index: usize,
    /// Number of rows in the full set.
    pub total_rows: usize,
}

// Manual impls: deriving would require `T: Clone`/`T: Copy`.
impl<T> Clone for Page<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Page<'_, T> {}

impl<T> Page<'_, T> {
    pub fn is_first(&self) -> bool {
        self.page_number == 1
    }

    pub fn is_last(&self) -> bool {
        self.page_number == self.total_pages
    }

    /// Footer text shown under a table, e.g. `Showing 6-10 of 12 entries`.
    pub fn summary(&self) -> String {
        if self.total_rows == 0 {
            return "Showing 0-0 of 0 entries".to_owned();
        }
        format!(
            "Showing {}-{} of {} entries",
            self.start_index + 1,
            self.end_index,
            self.total_rows
        )
    }
}

/// Number of pages needed for `row_count` rows, never less than one.
#[inline]
pub fn total_pages(row_count: usize, page_size: NonZeroUsize) -> usize {
    row_count.div_ceil(page_size.get()).max(1)
}

/// Clamps a requested page number into `[1, total_pages]`.
#[inline]
pub fn clamp_page(page_number: usize, total_pages: usize) -> usize {
    page_number.clamp(1, total_pages.max(1))
}

/// Computes the visible slice of `rows` for `page_number`.
pub fn paginate<T>(rows: &[T], page_size: NonZeroUsize, page_number: usize) -> Page<'_, T> {
    let total_pages = total_pages(rows.len(), page_size);
    let page_number = clamp_page(page_number, total_pages);
    let start_index = (page_number - 1) * page_size.get();
    let end_index = rows.len().min(start_index + page_size.get());

    Page {
        rows: &rows[start_index.min(end_index)..end_index],
        page_number,
        total_pages,
        start_index,
        end_index,
        total_rows: rows.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).expect("page size must be non-zero")
    }

    fn rows(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn twelve_rows_by_five_gives_three_pages() {
        let data = rows(12);

        let first = paginate(&data, size(5), 1);
        assert_eq!(first.total_pages, 3);
        assert_eq!((first.start_index, first.end_index), (0, 5));
        assert_eq!(first.rows, &[0, 1, 2, 3, 4]);

        let last = paginate(&data, size(5), 3);
        assert_eq!((last.start_index, last.end_index), (10, 12));
        assert_eq!(last.rows, &[10, 11]);
        assert!(last.is_last());
        assert!(!last.is_first());
    }

    #[test]
    fn empty_rows_have_one_empty_page() {
        let data: Vec<usize> = Vec::new();
        let page = paginate(&data, size(5), 1);

        assert_eq!(page.total_pages, 1);
        assert_eq!(page.page_number, 1);
        assert!(page.rows.is_empty());
        assert_eq!((page.start_index, page.end_index), (0, 0));
        assert_eq!(page.summary(), "Showing 0-0 of 0 entries");
    }

    #[test]
    fn empty_rows_clamp_any_page_to_first() {
        let data: Vec<usize> = Vec::new();
        assert_eq!(paginate(&data, size(10), 7), paginate(&data, size(10), 1));
    }

    #[test]
    fn out_of_range_pages_equal_boundary_pages() {
        for len in 0..40 {
            let data = rows(len);
            for page_size in 1..12 {
                let first = paginate(&data, size(page_size), 1);
                let total = first.total_pages;
                let last = paginate(&data, size(page_size), total);

                assert_eq!(paginate(&data, size(page_size), 0), first);
                assert_eq!(paginate(&data, size(page_size), total + 1), last);
                assert_eq!(paginate(&data, size(page_size), usize::MAX), last);
            }
        }
    }

    #[test]
    fn total_pages_matches_ceiling_with_floor_of_one() {
        for len in 0usize..60 {
            for page_size in 1..15 {
                let expected = std::cmp::max(1, len.div_ceil(page_size));
                let data = rows(len);
                let page = paginate(&data, size(page_size), 1);
                assert_eq!(page.total_pages, expected, "len={len} size={page_size}");
            }
        }
    }

    #[test]
    fn non_empty_rows_always_give_non_empty_pages() {
        for len in 1..40 {
            let data = rows(len);
            for page_size in 1..12 {
                for page_number in 0..=(len + 2) {
                    let page = paginate(&data, size(page_size), page_number);
                    assert!(
                        !page.rows.is_empty(),
                        "len={len} size={page_size} page={page_number}"
                    );
                }
            }
        }
    }

    #[test]
    fn slice_length_matches_remaining_rows() {
        for len in 0..40 {
            let data = rows(len);
            for page_size in 1..12 {
                let total = total_pages(len, size(page_size));
                for page_number in 1..=total {
                    let page = paginate(&data, size(page_size), page_number);
                    assert_eq!(page.start_index, (page_number - 1) * page_size);
                    assert_eq!(
                        page.rows.len(),
                        page_size.min(len - page.start_index),
                        "len={len} size={page_size} page={page_number}"
                    );
                    assert_eq!(page.rows.first(), data.get(page.start_index));
                }
            }
        }
    }

    #[test]
    fn summary_uses_one_based_start() {
        let data = rows(12);
        assert_eq!(
            paginate(&data, size(5), 2).summary(),
            "Showing 6-10 of 12 entries"
        );
        assert_eq!(
            paginate(&data, size(5), 3).summary(),
            "Showing 11-12 of 12 entries"
        );
    }

    #[test]
    fn clamp_page_handles_zero_total() {
        assert_eq!(clamp_page(0, 0), 1);
        assert_eq!(clamp_page(5, 0), 1);
    }
}
