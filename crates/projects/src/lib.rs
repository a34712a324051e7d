//! Projects domain module.
//!
//! Projects and their milestones as fetched for the client dashboard, plus the
//! pure derivations the dashboard shows for them (status, progress, next
//! milestone, days remaining). No IO, no mutation of fetched records.

pub mod derivation;
pub mod milestone;
pub mod project;

pub use derivation::{days_remaining, days_remaining_at, next_milestone, progress_percent, project_status};
pub use milestone::{Milestone, MilestoneStatus};
pub use project::{Project, ProjectStatus};
