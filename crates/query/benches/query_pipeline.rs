use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chrono::{Duration, NaiveDate};
use clientdesk_core::Money;
use clientdesk_invoicing::{Invoice, InvoiceStatus};
use clientdesk_projects::{Milestone, MilestoneStatus, Project};
use clientdesk_query::{query, InvoiceSort, Pagination, ProjectSort, QueryCriteria};

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
}

fn invoices(n: usize) -> Vec<Invoice> {
    (0..n)
        .map(|i| {
            let status = match i % 3 {
                0 => InvoiceStatus::Paid,
                1 => InvoiceStatus::Pending,
                _ => InvoiceStatus::Overdue,
            };
            Invoice::new(
                format!("inv-{i}"),
                format!("INV-2025-{i:04}"),
                base_date() + Duration::days((i * 37 % 365) as i64),
                Money::from_minor((i as u64 * 7_919) % 500_000),
                status,
            )
        })
        .collect()
}

fn projects(n: usize) -> Vec<Project> {
    (0..n)
        .map(|i| {
            let milestones = (0..6)
                .map(|j| {
                    let status = match (i + j) % 4 {
                        0 => MilestoneStatus::Done,
                        1 => MilestoneStatus::InProgress,
                        _ => MilestoneStatus::Pending,
                    };
                    Milestone::new(
                        format!("p{i}-m{j}"),
                        "Milestone",
                        status,
                        base_date() + Duration::days((i * 13 + j * 30) as i64 % 400),
                    )
                })
                .collect();
            Project::new(
                format!("p{i}"),
                format!("Project {}", n - i),
                "Web",
                base_date() + Duration::days(365),
                milestones,
            )
        })
        .collect()
}

fn bench_invoice_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("invoice_query");

    for size in [10usize, 100, 1_000].iter() {
        let data = invoices(*size);
        let criteria = QueryCriteria::default()
            .with_status(InvoiceStatus::Pending)
            .with_search("2025")
            .with_sort(InvoiceSort::Date);
        let pagination = Pagination::new(1, 10).unwrap();

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("filter_search_sort", size), &data, |b, data| {
            b.iter(|| black_box(query(data, &criteria, pagination).total_count));
        });
    }

    group.finish();
}

fn bench_project_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("project_query");

    for size in [10usize, 100, 1_000].iter() {
        let data = projects(*size);
        let pagination = Pagination::new(1, 10).unwrap();

        group.throughput(Throughput::Elements(*size as u64));
        for sort in [ProjectSort::Name, ProjectSort::Progress, ProjectSort::DueDate] {
            let criteria = QueryCriteria::default().with_sort(sort);
            group.bench_with_input(BenchmarkId::new(sort.as_str(), size), &data, |b, data| {
                b.iter(|| black_box(query(data, &criteria, pagination).items.len()));
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_invoice_query, bench_project_query);
criterion_main!(benches);
