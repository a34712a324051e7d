//! Built-in mock data for the demo dashboard.

use chrono::NaiveDate;

use clientdesk_core::Money;
use clientdesk_invoicing::{Invoice, InvoiceStatus};
use clientdesk_projects::{Milestone, MilestoneStatus, Project};

use crate::source::DashboardSnapshot;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // Literal dates below are all valid.
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn invoice(n: u32, amount: u64, status: InvoiceStatus, issued: NaiveDate) -> Invoice {
    Invoice::new(
        format!("inv-{n:03}"),
        format!("INV-2025-{n:03}"),
        issued,
        Money::from_major(amount),
        status,
    )
}

pub fn demo_invoices() -> Vec<Invoice> {
    use InvoiceStatus::*;
    vec![
        invoice(1, 2500, Paid, date(2025, 1, 15)),
        invoice(2, 1800, Paid, date(2025, 2, 12)),
        invoice(3, 3200, Paid, date(2025, 2, 28)),
        invoice(4, 1200, Overdue, date(2025, 3, 15)),
        invoice(5, 950, Overdue, date(2025, 3, 30)),
        invoice(6, 1800, Pending, date(2025, 5, 10)),
        invoice(7, 2750, Pending, date(2025, 6, 5)),
        invoice(8, 640, Pending, date(2025, 6, 20)),
    ]
}

pub fn demo_projects() -> Vec<Project> {
    use MilestoneStatus::*;
    vec![
        Project::new(
            "prj-website",
            "Corporate Website Redesign",
            "Web Development",
            date(2025, 7, 31),
            vec![
                Milestone::new("prj-website-1", "Discovery & sitemap", Done, date(2025, 1, 20)),
                Milestone::new("prj-website-2", "Visual design", Done, date(2025, 3, 1)),
                Milestone::new("prj-website-3", "Front-end build", InProgress, date(2025, 5, 15)),
                Milestone::new("prj-website-4", "Content migration", Pending, date(2025, 6, 30)),
                Milestone::new("prj-website-5", "Launch", Pending, date(2025, 7, 31)),
            ],
        ),
        Project::new(
            "prj-brand",
            "Brand Identity Package",
            "Design",
            date(2025, 3, 31),
            vec![
                Milestone::new("prj-brand-1", "Moodboards", Done, date(2025, 1, 31)),
                Milestone::new("prj-brand-2", "Logo concepts", Done, date(2025, 2, 28)),
                Milestone::new("prj-brand-3", "Brand guidelines", Done, date(2025, 3, 31)),
            ],
        ),
        Project::new(
            "prj-app",
            "Customer Mobile App",
            "Mobile Development",
            date(2025, 11, 30),
            vec![
                Milestone::new("prj-app-1", "Requirements workshop", Pending, date(2025, 6, 10)),
                Milestone::new("prj-app-2", "Prototype", Pending, date(2025, 8, 1)),
                Milestone::new("prj-app-3", "Beta release", Pending, date(2025, 10, 15)),
            ],
        ),
        Project::new(
            "prj-seo",
            "SEO & Analytics Setup",
            "Marketing",
            date(2025, 6, 15),
            vec![
                Milestone::new("prj-seo-1", "Audit", Done, date(2025, 4, 1)),
                Milestone::new("prj-seo-2", "Tracking plan", InProgress, date(2025, 5, 20)),
            ],
        ),
        Project::new(
            "prj-support",
            "Support Retainer",
            "Maintenance",
            date(2025, 12, 31),
            vec![],
        ),
    ]
}

/// The full demo snapshot (no pre-aggregated summary; it is derived on request).
pub fn demo_snapshot() -> DashboardSnapshot {
    DashboardSnapshot {
        invoices: demo_invoices(),
        projects: demo_projects(),
        client_summary: None,
    }
}
