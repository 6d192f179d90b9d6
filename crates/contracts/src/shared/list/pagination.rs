//! Page arithmetic for client-side lists. Pages are 1-based.

/// Number of pages needed for `total_items`; never less than one.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size.max(1)).max(1)
}

/// Clamps a requested page into `[1, total_pages]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Visible window of a list after clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSlice<'a, T> {
    pub visible: &'a [T],
    /// Effective page after clamping.
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> PageSlice<'_, T> {
    /// 1-based position of the first visible item, 0 when nothing is visible.
    pub fn first_index(&self) -> usize {
        if self.visible.is_empty() {
            0
        } else {
            (self.page - 1) * self.page_size + 1
        }
    }

    /// 1-based position of the last visible item, 0 when nothing is visible.
    pub fn last_index(&self) -> usize {
        (self.first_index() + self.visible.len()).saturating_sub(1)
    }
}

/// Slices `items` for `current_page`, clamping out-of-range pages.
pub fn paginate<T>(items: &[T], page_size: usize, current_page: usize) -> PageSlice<'_, T> {
    let page_size = page_size.max(1);
    let total_pages = total_pages(items.len(), page_size);
    let page = clamp_page(current_page, total_pages);
    let start = ((page - 1) * page_size).min(items.len());
    let end = (start + page_size).min(items.len());

    PageSlice {
        visible: &items[start..end],
        page,
        page_size,
        total_pages,
        total_items: items.len(),
    }
}

/// Page numbers shown between the prev/next buttons: a contiguous run of at
/// most `width` pages containing `current`, kept inside `[1, total]`.
pub fn page_window(current: usize, total: usize, width: usize) -> Vec<usize> {
    let total = total.max(1);
    let width = width.clamp(1, total);
    let current = clamp_page(current, total);

    let mut start = current.saturating_sub(width / 2).max(1);
    if start + width - 1 > total {
        start = total + 1 - width;
    }
    (start..start + width).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 5), 1);
        assert_eq!(total_pages(1, 5), 1);
        assert_eq!(total_pages(5, 5), 1);
        assert_eq!(total_pages(6, 5), 2);
        assert_eq!(total_pages(12, 5), 3);
        assert_eq!(total_pages(3, 0), 3);
    }

    #[test]
    fn test_empty_items() {
        let items: Vec<u32> = Vec::new();
        let slice = paginate(&items, 5, 1);
        assert!(slice.visible.is_empty());
        assert_eq!(slice.total_pages, 1);
        assert_eq!(slice.page, 1);
        assert_eq!(slice.first_index(), 0);

        let slice = paginate(&items, 5, 7);
        assert!(slice.visible.is_empty());
        assert_eq!(slice.page, 1);
    }

    #[test]
    fn test_twelve_items_page_size_five() {
        let items: Vec<u32> = (1..=12).collect();

        let p1 = paginate(&items, 5, 1);
        assert_eq!(p1.visible, &[1, 2, 3, 4, 5]);
        assert_eq!(p1.total_pages, 3);

        let p2 = paginate(&items, 5, 2);
        assert_eq!(p2.visible, &[6, 7, 8, 9, 10]);

        let p3 = paginate(&items, 5, 3);
        assert_eq!(p3.visible, &[11, 12]);
        assert_eq!(p3.first_index(), 11);
        assert_eq!(p3.last_index(), 12);
    }

    #[test]
    fn test_out_of_range_pages_are_clamped() {
        let items: Vec<u32> = (1..=12).collect();
        assert_eq!(paginate(&items, 5, 0).page, 1);
        assert_eq!(paginate(&items, 5, 0).visible, &[1, 2, 3, 4, 5]);
        assert_eq!(paginate(&items, 5, 99).page, 3);
        assert_eq!(paginate(&items, 5, 99).visible, &[11, 12]);
    }

    #[test]
    fn test_page_sizes_for_every_count() {
        for n in 0..40usize {
            for size in 1..9usize {
                let items: Vec<usize> = (0..n).collect();
                let total = total_pages(n, size);
                assert_eq!(total, std::cmp::max(1, n.div_ceil(size)));
                let mut seen = 0;
                for page in 1..=total {
                    let slice = paginate(&items, size, page);
                    if page < total {
                        assert_eq!(slice.visible.len(), size);
                    } else {
                        assert_eq!(slice.visible.len(), n - (total - 1) * size);
                    }
                    seen += slice.visible.len();
                }
                assert_eq!(seen, n);
            }
        }
    }

    #[test]
    fn test_page_window() {
        assert_eq!(page_window(1, 1, 5), vec![1]);
        assert_eq!(page_window(1, 10, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(5, 10, 5), vec![3, 4, 5, 6, 7]);
        assert_eq!(page_window(10, 10, 5), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_window(2, 3, 5), vec![1, 2, 3]);
        assert_eq!(page_window(4, 10, 4), vec![2, 3, 4, 5]);
        assert_eq!(page_window(0, 0, 3), vec![1]);
    }
}
