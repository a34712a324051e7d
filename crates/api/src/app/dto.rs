use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use clientdesk_core::{DomainError, Money};
use clientdesk_invoicing::Invoice;
use clientdesk_projects::{Milestone, Project, ProjectStatus};
use clientdesk_query::{Pagination, QueryCriteria, QueryResult};

// -------------------------
// Request DTOs
// -------------------------

/// List-view query string: `?status=&search=&sort=&page=&page_size=`.
///
/// Numbers arrive as text so a malformed value is reported through the same
/// JSON error body as every other bad parameter.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub status: Option<String>,
    pub search: Option<String>,
    pub sort: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
}

impl ListParams {
    pub fn criteria<S, K>(&self) -> Result<QueryCriteria<S, K>, DomainError>
    where
        S: core::str::FromStr<Err = DomainError>,
        K: core::str::FromStr<Err = DomainError>,
    {
        QueryCriteria::parse(
            self.status.as_deref().unwrap_or("all"),
            self.search.as_deref().unwrap_or(""),
            self.sort.as_deref().unwrap_or(""),
        )
    }

    pub fn pagination(&self) -> Result<Pagination, DomainError> {
        Pagination::from_params(
            parse_number("page", self.page.as_deref())?,
            parse_number("page_size", self.page_size.as_deref())?,
        )
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct InvoiceSummaryParams {
    pub year: Option<String>,
}

impl InvoiceSummaryParams {
    pub fn year(&self) -> Result<Option<i32>, DomainError> {
        parse_number("year", self.year.as_deref())
    }
}

/// Blank or missing means "use the default".
fn parse_number<T: core::str::FromStr>(name: &str, raw: Option<&str>) -> Result<Option<T>, DomainError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s
            .parse()
            .map(Some)
            .map_err(|_| DomainError::validation(format!("{name} must be a whole number, got {s:?}"))),
    }
}

// -------------------------
// Response DTOs
// -------------------------

/// One page of a list view.
#[derive(Debug, Serialize)]
pub struct PageResponse<T> {
    pub items: Vec<T>,
    pub total_count: usize,
    pub page: u32,
    pub page_size: u32,
    pub page_count: usize,
}

impl<T> PageResponse<T> {
    pub fn from_result<'a, U>(result: QueryResult<'a, U>, map: impl Fn(&'a U) -> T) -> Self {
        let page_count = result.page_count();
        Self {
            items: result.items.into_iter().map(map).collect(),
            total_count: result.total_count,
            page: result.pagination.page,
            page_size: result.pagination.page_size,
            page_count,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct InvoiceSummaryResponse<'a> {
    pub year: i32,
    pub outstanding_balance: Money,
    pub total_paid: Money,
    pub next_due_invoice: Option<&'a Invoice>,
}

/// Project with its derived dashboard fields.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectView<'a> {
    pub id: &'a str,
    pub name: &'a str,
    #[serde(rename = "type")]
    pub project_type: &'a str,
    pub due_date: NaiveDate,
    pub status: ProjectStatus,
    pub progress: u8,
    pub days_remaining: i64,
    pub next_milestone: Option<&'a Milestone>,
    pub milestones: &'a [Milestone],
}

impl<'a> ProjectView<'a> {
    pub fn new(project: &'a Project, today: NaiveDate) -> Self {
        Self {
            id: project.id.as_str(),
            name: &project.name,
            project_type: &project.project_type,
            due_date: project.due_date,
            status: project.status(),
            progress: project.progress(),
            days_remaining: project.days_remaining(today),
            next_milestone: project.next_milestone(),
            milestones: &project.milestones,
        }
    }
}
