//! Infrastructure layer: data-access port, in-memory source, read-side projections.

pub mod fixtures;
pub mod projections;
pub mod source;

pub use projections::client_summary::ClientSummary;
pub use source::{DashboardSnapshot, DashboardSource, InMemoryDashboardSource, SourceError};
