//! The composed list query and its individual stages.
//!
//! Stages always run in the order filter → search → sort → paginate. Each
//! stage takes and returns references, never touching the caller's records.

use std::borrow::Cow;
use std::cmp::Ordering;

use clientdesk_core::DomainError;

use crate::criteria::{QueryCriteria, StatusFilter};
use crate::pagination::{Pagination, QueryResult};

/// A record type the list-view pipeline can operate on.
pub trait Queryable {
    /// Status compared by the filter stage (derived or authoritative).
    type Status: Copy + PartialEq + core::str::FromStr<Err = DomainError>;

    /// Fixed enumeration of sort keys.
    type SortKey: Copy + core::fmt::Debug + core::str::FromStr<Err = DomainError>;

    fn status(&self) -> Self::Status;

    /// Fields the free-text search looks at.
    fn search_fields(&self) -> Vec<Cow<'_, str>>;

    /// Ordering of `self` relative to `other` under `key`.
    fn compare_by(&self, other: &Self, key: Self::SortKey) -> Ordering;
}

/// Keep items whose status matches the filter, preserving order.
pub fn filter_by_status<'a, T: Queryable>(
    items: impl IntoIterator<Item = &'a T>,
    filter: &StatusFilter<T::Status>,
) -> Vec<&'a T>
where
    T: 'a,
{
    items
        .into_iter()
        .filter(|item| filter.matches(&item.status()))
        .collect()
}

/// Case-insensitive substring search over each item's search fields.
///
/// `needle` must already be trimmed and lowercased
/// ([`QueryCriteria::search_needle`]); `None` keeps everything.
pub fn search<'a, T: Queryable>(items: Vec<&'a T>, needle: Option<&str>) -> Vec<&'a T> {
    let Some(needle) = needle else {
        return items;
    };
    items
        .into_iter()
        .filter(|item| {
            item.search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(needle))
        })
        .collect()
}

/// Stable sort: items with equal keys keep their relative order.
pub fn sort_by<T: Queryable>(items: &mut [&T], key: T::SortKey) {
    items.sort_by(|a, b| a.compare_by(b, key));
}

/// The slice of `items` selected by `pagination` (empty when out of range).
pub fn paginate<'s, 'a, T>(items: &'s [&'a T], pagination: Pagination) -> &'s [&'a T] {
    &items[pagination.range(items.len())]
}

/// Run the full pipeline over a fetched collection.
pub fn query<'a, T: Queryable>(
    items: &'a [T],
    criteria: &QueryCriteria<T::Status, T::SortKey>,
    pagination: Pagination,
) -> QueryResult<'a, T> {
    let filtered = filter_by_status(items, &criteria.status);
    let needle = criteria.search_needle();
    let mut matched = search(filtered, needle.as_deref());
    if let Some(key) = criteria.sort {
        sort_by(&mut matched, key);
    }

    let total_count = matched.len();
    let page = paginate(&matched, pagination).to_vec();

    tracing::debug!(
        input = items.len(),
        matched = total_count,
        returned = page.len(),
        page = pagination.page,
        page_size = pagination.page_size,
        sort = ?criteria.sort,
        "list query evaluated"
    );

    QueryResult {
        items: page,
        total_count,
        pagination,
    }
}
