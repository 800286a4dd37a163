//! Pagination types

/// Items per page. Fixed; clients cannot change it.
pub const QUESTIONS_PER_PAGE: u32 = 10;

/// A requested page (1-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
}

impl Pagination {
    /// Create pagination, clamping the page to a minimum of 1.
    pub fn new(page: u32) -> Self {
        Self { page: page.max(1) }
    }

    /// Read a page from a raw query parameter.
    ///
    /// Absent or unparsable values fall back to page 1.
    pub fn from_param(raw: Option<&str>) -> Self {
        let page = raw
            .and_then(|s| s.trim().parse::<i64>().ok())
            .map(|n| n.clamp(1, u32::MAX as i64) as u32)
            .unwrap_or(1);
        Self::new(page)
    }

    /// SQL OFFSET value.
    pub fn offset(&self) -> u64 {
        (self.page as u64 - 1) * QUESTIONS_PER_PAGE as u64
    }

    /// SQL LIMIT value.
    pub fn limit(&self) -> u32 {
        QUESTIONS_PER_PAGE
    }

    /// Wrap an already-windowed page of items.
    pub fn wrap<T>(&self, items: Vec<T>, total: i64) -> Paginated<T> {
        Paginated { items, total }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1 }
    }
}

/// Slice one page out of a fully ordered result set.
///
/// Pages past the end yield an empty slice.
pub fn paginate<T>(page: Pagination, items: &[T]) -> &[T] {
    let start = usize::try_from(page.offset())
        .unwrap_or(usize::MAX)
        .min(items.len());
    let end = start
        .saturating_add(QUESTIONS_PER_PAGE as usize)
        .min(items.len());
    &items[start..end]
}

/// A page of results plus the size of the whole result set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    /// Total count across all pages
    pub total: i64,
}

impl<T> Paginated<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_calculation() {
        assert_eq!(Pagination::new(1).offset(), 0);
        assert_eq!(Pagination::new(2).offset(), 10);
        assert_eq!(Pagination::new(5).offset(), 40);
    }

    #[test]
    fn clamps_page() {
        assert_eq!(Pagination::new(0).page, 1);
    }

    #[test]
    fn parses_query_param() {
        assert_eq!(Pagination::from_param(None).page, 1);
        assert_eq!(Pagination::from_param(Some("3")).page, 3);
        assert_eq!(Pagination::from_param(Some(" 2 ")).page, 2);
        assert_eq!(Pagination::from_param(Some("abc")).page, 1);
        assert_eq!(Pagination::from_param(Some("")).page, 1);
        assert_eq!(Pagination::from_param(Some("-4")).page, 1);
        assert_eq!(Pagination::from_param(Some("0")).page, 1);
        assert_eq!(Pagination::from_param(Some("99999999999")).page, u32::MAX);
    }

    #[test]
    fn slices_pages() {
        let items: Vec<u32> = (1..=23).collect();
        assert_eq!(paginate(Pagination::new(1), &items), &items[0..10]);
        assert_eq!(paginate(Pagination::new(2), &items), &items[10..20]);
        assert_eq!(paginate(Pagination::new(3), &items), &[21, 22, 23]);
        assert!(paginate(Pagination::new(4), &items).is_empty());
        assert!(paginate(Pagination::new(u32::MAX), &items).is_empty());
    }

    #[test]
    fn empty_input() {
        let items: Vec<u32> = Vec::new();
        assert!(paginate(Pagination::default(), &items).is_empty());
    }

    #[test]
    fn wrap_keeps_total() {
        let page = Pagination::new(3).wrap(vec![21, 22, 23], 23);
        assert_eq!(page.items, vec![21, 22, 23]);
        assert_eq!(page.total, 23);
        assert!(!page.is_empty());

        let past_end: Paginated<u32> = Pagination::new(4).wrap(vec![], 23);
        assert!(past_end.is_empty());
        assert_eq!(past_end.total, 23);
    }
}
