//! Caller-supplied query criteria.
//!
//! The dashboard keeps filter/search/sort selections as view state; they
//! arrive here as explicit values (or raw strings, parsed strictly).

use core::str::FromStr;

use clientdesk_core::{DomainError, DomainResult};

/// Status filter: everything, or exactly one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter<S> {
    All,
    Only(S),
}

impl<S: PartialEq> StatusFilter<S> {
    pub fn matches(&self, status: &S) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => wanted == status,
        }
    }
}

impl<S> Default for StatusFilter<S> {
    fn default() -> Self {
        StatusFilter::All
    }
}

impl<S> FromStr for StatusFilter<S>
where
    S: FromStr<Err = DomainError>,
{
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(StatusFilter::All);
        }
        s.parse().map(StatusFilter::Only)
    }
}

/// Filter, search and sort selection for one list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryCriteria<S, K> {
    pub status: StatusFilter<S>,
    /// Free-text search; blank means no search.
    pub search: String,
    /// `None` keeps input order.
    pub sort: Option<K>,
}

impl<S, K> Default for QueryCriteria<S, K> {
    fn default() -> Self {
        Self {
            status: StatusFilter::All,
            search: String::new(),
            sort: None,
        }
    }
}

impl<S, K> QueryCriteria<S, K>
where
    S: FromStr<Err = DomainError>,
    K: FromStr<Err = DomainError>,
{
    /// Parse raw selections. An empty sort string means "no sort"; unknown
    /// status or sort strings are errors, never silently defaulted.
    pub fn parse(status: &str, search: &str, sort: &str) -> DomainResult<Self> {
        let status = if status.trim().is_empty() {
            StatusFilter::All
        } else {
            status.parse()?
        };
        let sort = match sort.trim() {
            "" => None,
            s => Some(s.parse()?),
        };
        Ok(Self {
            status,
            search: search.to_string(),
            sort,
        })
    }
}

impl<S, K> QueryCriteria<S, K> {
    pub fn with_status(mut self, status: S) -> Self {
        self.status = StatusFilter::Only(status);
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_sort(mut self, sort: K) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Lowercased, trimmed search needle, or `None` when the search is blank.
    pub fn search_needle(&self) -> Option<String> {
        let trimmed = self.search.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
    }
}
