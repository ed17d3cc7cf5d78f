//! Offset pagination over in-memory listings.

/// Zero-based page request.
///
/// A listing skips `page * size` entries and then yields at most `size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub page: usize,
    pub size: usize,
}

impl Page {
    /// Page size used when the caller does not supply one.
    pub const DEFAULT_SIZE: usize = 10;

    #[must_use]
    pub const fn new(page: usize, size: usize) -> Self {
        Self { page, size }
    }

    /// Number of matching entries skipped before this page starts.
    #[must_use]
    pub const fn offset(self) -> usize {
        self.page.saturating_mul(self.size)
    }

    /// Apply this page to an already filtered iterator.
    pub fn apply<I>(self, items: I) -> impl Iterator<Item = I::Item>
    where
        I: IntoIterator,
    {
        items.into_iter().skip(self.offset()).take(self.size)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(0, Self::DEFAULT_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_page_is_first_ten() {
        assert_eq!(Page::default(), Page::new(0, 10));
    }

    #[test]
    fn consecutive_pages_do_not_overlap() {
        let items = [1, 2, 3];

        let first: Vec<_> = Page::new(0, 2).apply(items).collect();
        let second: Vec<_> = Page::new(1, 2).apply(items).collect();

        assert_eq!(first, vec![1, 2]);
        assert_eq!(second, vec![3]);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let items = [1, 2, 3];

        assert_eq!(Page::new(5, 2).apply(items).count(), 0);
    }

    #[test]
    fn zero_size_yields_nothing() {
        assert_eq!(Page::new(0, 0).apply([1, 2, 3]).count(), 0);
    }

    #[test]
    fn huge_offsets_saturate() {
        assert_eq!(Page::new(usize::MAX, usize::MAX).offset(), usize::MAX);
    }
}
