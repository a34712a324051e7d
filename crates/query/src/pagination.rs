//! Page selection and paged results.

use serde::Serialize;

use clientdesk_core::{DomainError, DomainResult};

/// 1-based page selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    /// Page number, starting at 1. Page 0 selects nothing.
    pub page: u32,
    /// Items per page (always > 0).
    pub page_size: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
        }
    }
}

impl Pagination {
    pub fn new(page: u32, page_size: u32) -> DomainResult<Self> {
        if page_size == 0 {
            return Err(DomainError::validation("page_size must be greater than zero"));
        }
        Ok(Self { page, page_size })
    }

    /// Build from optional query parameters, falling back to defaults.
    pub fn from_params(page: Option<u32>, page_size: Option<u32>) -> DomainResult<Self> {
        let defaults = Self::default();
        Self::new(
            page.unwrap_or(defaults.page),
            page_size.unwrap_or(defaults.page_size),
        )
    }

    /// Index range `[(page-1)*size, page*size)` clamped to `len`; empty when
    /// the page is out of range.
    pub fn range(&self, len: usize) -> core::ops::Range<usize> {
        let size = self.page_size as usize;
        let start = match (self.page as usize)
            .checked_sub(1)
            .and_then(|p| p.checked_mul(size))
        {
            Some(start) if start < len => start,
            _ => return 0..0,
        };
        start..start.saturating_add(size).min(len)
    }

    /// Number of pages needed for `total` items.
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size as usize)
    }
}

/// One page of a query plus the pre-pagination match count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryResult<'a, T> {
    pub items: Vec<&'a T>,
    /// Matches after filter + search, across all pages.
    pub total_count: usize,
    pub pagination: Pagination,
}

impl<'a, T> QueryResult<'a, T> {
    pub fn page_count(&self) -> usize {
        self.pagination.page_count(self.total_count)
    }

    pub fn has_more(&self) -> bool {
        (self.pagination.page as usize) < self.page_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_covers_partial_last_page() {
        let p = Pagination::new(3, 5).unwrap();
        assert_eq!(p.range(12), 10..12);
        assert_eq!(p.page_count(12), 3);
    }

    #[test]
    fn out_of_range_pages_are_empty() {
        assert_eq!(Pagination::new(4, 5).unwrap().range(12), 0..0);
        assert_eq!(Pagination::new(0, 5).unwrap().range(12), 0..0);
        assert_eq!(Pagination::new(1, 5).unwrap().range(0), 0..0);
        assert_eq!(Pagination::new(u32::MAX, u32::MAX).unwrap().range(3), 0..0);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        assert!(matches!(Pagination::new(1, 0), Err(DomainError::Validation(_))));
    }

    #[test]
    fn from_params_defaults() {
        assert_eq!(Pagination::from_params(None, None).unwrap(), Pagination::default());
        assert_eq!(
            Pagination::from_params(Some(2), None).unwrap(),
            Pagination { page: 2, page_size: 10 }
        );
    }
}
