//! Client summary projection.
//!
//! The headline numbers on the dashboard home: open work, money owed, and
//! what is due next. Recomputed on demand from a snapshot; never stored.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use clientdesk_core::Money;
use clientdesk_invoicing::{next_due_invoice, outstanding_balance, Invoice};
use clientdesk_projects::{days_remaining, Project, ProjectStatus};

/// Read model: client summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSummary {
    /// Projects not yet completed.
    pub active_projects_count: usize,
    /// Milestones not yet done, across all projects.
    pub pending_milestones_count: usize,
    pub has_outstanding_invoice: bool,
    pub outstanding_invoice_amount: Money,
    /// Days until the next pending invoice's date (negative if already past).
    pub outstanding_invoice_due_days: Option<i64>,
    /// Earliest open milestone due date across all projects.
    pub next_milestone_date: Option<NaiveDate>,
}

impl ClientSummary {
    pub fn derive(projects: &[Project], invoices: &[Invoice], today: NaiveDate) -> Self {
        let active_projects_count = projects
            .iter()
            .filter(|p| p.status() != ProjectStatus::Completed)
            .count();

        let pending_milestones_count = projects
            .iter()
            .flat_map(|p| p.milestones.iter())
            .filter(|m| !m.status.is_done())
            .count();

        let outstanding = outstanding_balance(invoices);

        let outstanding_invoice_due_days =
            next_due_invoice(invoices).map(|inv| days_remaining(inv.date, today));

        let next_milestone_date = projects
            .iter()
            .filter_map(|p| p.next_milestone())
            .map(|m| m.due_date)
            .min();

        Self {
            active_projects_count,
            pending_milestones_count,
            has_outstanding_invoice: !outstanding.is_zero(),
            outstanding_invoice_amount: outstanding,
            outstanding_invoice_due_days,
            next_milestone_date,
        }
    }
}
