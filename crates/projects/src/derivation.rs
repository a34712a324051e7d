//! Pure derivations over projects and milestones.
//!
//! All functions are total: an empty milestone list is a valid input with a
//! defined result (progress 0, no next milestone, status Planning).

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use clientdesk_core::calendar;

use crate::milestone::{Milestone, MilestoneStatus};
use crate::project::{Project, ProjectStatus};

/// Derive a project's status from its milestones.
///
/// - Completed: at least one milestone and every milestone is done.
/// - In progress: not completed and at least one milestone is in progress.
/// - Planning: everything else, including a project with no milestones.
pub fn project_status(project: &Project) -> ProjectStatus {
    let milestones = &project.milestones;
    if !milestones.is_empty() && milestones.iter().all(|m| m.status.is_done()) {
        ProjectStatus::Completed
    } else if milestones
        .iter()
        .any(|m| m.status == MilestoneStatus::InProgress)
    {
        ProjectStatus::InProgress
    } else {
        ProjectStatus::Planning
    }
}

/// Weighted completion percentage: done counts 1, in progress counts 0.5.
///
/// `round(100 * (done + 0.5 * in_progress) / total)`, rounding halves up, and
/// 0 for an empty list.
pub fn progress_percent(milestones: &[Milestone]) -> u8 {
    let total = milestones.len() as u64;
    if total == 0 {
        return 0;
    }

    let (done, in_progress) = milestones
        .iter()
        .fold((0u64, 0u64), |(done, wip), m| match m.status {
            MilestoneStatus::Done => (done + 1, wip),
            MilestoneStatus::InProgress => (done, wip + 1),
            MilestoneStatus::Pending => (done, wip),
        });

    // Half-milestones in units of 1/200: floor((N + total) / (2 * total)) == round(N / (2 * total)).
    let weighted = 200 * done + 100 * in_progress;
    let percent = (weighted + total) / (2 * total);
    percent.min(100) as u8
}

/// Earliest-due milestone that is not done yet.
///
/// Ties on due date resolve to the milestone that comes first in the list.
pub fn next_milestone(milestones: &[Milestone]) -> Option<&Milestone> {
    milestones
        .iter()
        .filter(|m| !m.status.is_done())
        .min_by_key(|m| m.due_date)
}

/// Calendar days from `today` until `due` (negative = overdue, 0 = due today).
pub fn days_remaining(due: NaiveDate, today: NaiveDate) -> i64 {
    calendar::days_between(due, today)
}

/// [`days_remaining`] for two instants, both truncated to dates in `tz` first.
pub fn days_remaining_at<Tz: TimeZone>(due: &DateTime<Utc>, now: &DateTime<Utc>, tz: &Tz) -> i64 {
    days_remaining(calendar::local_date(due, tz), calendar::local_date(now, tz))
}
