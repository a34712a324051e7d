//! List-view query pipeline: filter → search → sort → paginate.
//!
//! Generic over any [`Queryable`] collection; invoices and projects implement
//! it here. The pipeline borrows its input and returns references in view
//! order, so callers keep ownership of the fetched snapshot.

pub mod criteria;
pub mod invoices;
pub mod pagination;
pub mod pipeline;
pub mod projects;

pub use criteria::{QueryCriteria, StatusFilter};
pub use invoices::InvoiceSort;
pub use pagination::{Pagination, QueryResult};
pub use pipeline::{filter_by_status, paginate, query, search, sort_by, Queryable};
pub use projects::ProjectSort;
