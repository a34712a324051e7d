//! `clientdesk-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod calendar;
pub mod entity;
pub mod error;
pub mod id;
pub mod money;
pub mod value_object;

pub use calendar::{days_between, local_date};
pub use entity::{find_by_id, Entity};
pub use error::{DomainError, DomainResult};
pub use id::{InvoiceId, MilestoneId, ProjectId};
pub use money::Money;
pub use value_object::ValueObject;
