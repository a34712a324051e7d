//! Invoicing domain module.
//!
//! Invoices as fetched for the client dashboard and the pure aggregations
//! shown over them (balances, next due invoice, paid-to-date). Statuses are
//! authoritative; nothing here derives them from amounts or dates.

pub mod aggregation;
pub mod invoice;

pub use aggregation::{next_due_invoice, outstanding_balance, total_paid};
pub use invoice::{Invoice, InvoiceStatus};
