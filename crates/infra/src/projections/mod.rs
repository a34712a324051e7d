//! Read-side projections derived from fetched dashboard collections.

pub mod client_summary;
