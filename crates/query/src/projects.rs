//! Project list queries.

use std::borrow::Cow;
use std::cell::RefCell;
use std::cmp::Ordering;

use clientdesk_core::DomainError;
use clientdesk_projects::{Project, ProjectStatus};
use feruca::Collator;

use crate::pipeline::Queryable;

/// Sort keys offered by the project list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectSort {
    /// Name, A to Z.
    Name,
    /// Progress percent, highest first.
    Progress,
    /// Next milestone due date, soonest first; projects with nothing left go last.
    DueDate,
}

impl ProjectSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectSort::Name => "Name",
            ProjectSort::Progress => "Progress",
            ProjectSort::DueDate => "Due Date",
        }
    }
}

impl core::str::FromStr for ProjectSort {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "name" => Ok(ProjectSort::Name),
            "progress" | "percentcomplete" => Ok(ProjectSort::Progress),
            "duedate" | "due" => Ok(ProjectSort::DueDate),
            _ => Err(DomainError::unknown_option("project sort", s)),
        }
    }
}

thread_local! {
    // CLDR root collation; the collator keeps per-call scratch state.
    static COLLATOR: RefCell<Collator> = RefCell::new(Collator::default());
}

/// Name ordering used by the project list.
///
/// Unicode collation with root-locale rules: accents and case are secondary
/// to the base letter, so "Émile" sorts before "Zeta" and "a" before "A".
/// Identical names compare equal.
pub fn collate(a: &str, b: &str) -> Ordering {
    COLLATOR.with(|collator| collator.borrow_mut().collate(a, b))
}

impl Queryable for Project {
    type Status = ProjectStatus;
    type SortKey = ProjectSort;

    fn status(&self) -> ProjectStatus {
        Project::status(self)
    }

    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::Borrowed(self.name.as_str())]
    }

    fn compare_by(&self, other: &Self, key: ProjectSort) -> Ordering {
        match key {
            ProjectSort::Name => collate(&self.name, &other.name),
            ProjectSort::Progress => other.progress().cmp(&self.progress()),
            ProjectSort::DueDate => {
                let a = self.next_milestone().map(|m| m.due_date);
                let b = other.next_milestone().map(|m| m.due_date);
                match (a, b) {
                    (Some(a), Some(b)) => a.cmp(&b),
                    (Some(_), None) => Ordering::Less,
                    (None, Some(_)) => Ordering::Greater,
                    (None, None) => Ordering::Equal,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{query, Pagination, QueryCriteria, StatusFilter};
    use chrono::NaiveDate;
    use clientdesk_projects::{Milestone, MilestoneStatus};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn project(id: &str, name: &str, statuses: &[(MilestoneStatus, NaiveDate)]) -> Project {
        let milestones = statuses
            .iter()
            .enumerate()
            .map(|(i, (s, d))| Milestone::new(format!("{id}-m{i}"), "step", *s, *d))
            .collect();
        Project::new(id, name, "Web", date(2025, 12, 31), milestones)
    }

    fn portfolio() -> Vec<Project> {
        use MilestoneStatus::*;
        vec![
            project("p1", "website redesign", &[(Done, date(2025, 1, 1)), (InProgress, date(2025, 3, 1))]),
            project("p2", "Brand Identity", &[(Done, date(2025, 1, 5)), (Done, date(2025, 2, 5))]),
            project("p3", "Mobile App", &[(Pending, date(2025, 2, 10)), (Pending, date(2025, 4, 1))]),
            project("p4", "analytics Setup", &[]),
            project("p5", "SEO Audit", &[(InProgress, date(2025, 2, 10))]),
        ]
    }

    fn ids<'a>(items: &[&'a Project]) -> Vec<&'a str> {
        items.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn filter_uses_derived_status() {
        let projects = portfolio();
        let criteria = QueryCriteria::parse("In Progress", "", "").unwrap();
        let result = query(&projects, &criteria, Pagination::default());
        assert_eq!(ids(&result.items), ["p1", "p5"]);

        let criteria = QueryCriteria::parse("Planning", "", "").unwrap();
        let result = query(&projects, &criteria, Pagination::default());
        assert_eq!(ids(&result.items), ["p3", "p4"]);
    }

    #[test]
    fn name_sort_ignores_case() {
        let projects = portfolio();
        let criteria = QueryCriteria::default().with_sort(ProjectSort::Name);
        let result = query(&projects, &criteria, Pagination::default());
        assert_eq!(ids(&result.items), ["p4", "p2", "p3", "p5", "p1"]);
    }

    #[test]
    fn accented_names_sort_by_base_letter() {
        assert_eq!(collate("Émile", "Zeta"), Ordering::Less);
        assert_eq!(collate("Eagle", "Éclair"), Ordering::Less);
        assert_eq!(collate("Éclair", "Edge"), Ordering::Less);

        let projects = vec![
            project("z", "Zeta Rebrand", &[]),
            project("e", "Émile Portfolio", &[]),
            project("a", "Atlas", &[]),
        ];
        let criteria = QueryCriteria::default().with_sort(ProjectSort::Name);
        let result = query(&projects, &criteria, Pagination::default());
        assert_eq!(ids(&result.items), ["a", "e", "z"]);
    }

    #[test]
    fn lowercase_sorts_before_uppercase_of_same_letter() {
        assert_eq!(collate("a", "A"), Ordering::Less);
        assert_eq!(collate("A", "a"), Ordering::Greater);
        assert_eq!(collate("apple", "Banana"), Ordering::Less);
    }

    #[test]
    fn equal_names_keep_input_order() {
        assert_eq!(collate("Website", "Website"), Ordering::Equal);

        let projects = vec![
            project("w1", "Website", &[]),
            project("b", "Branding", &[]),
            project("w2", "Website", &[]),
            project("w3", "Website", &[]),
        ];
        let criteria = QueryCriteria::default().with_sort(ProjectSort::Name);
        let result = query(&projects, &criteria, Pagination::default());
        assert_eq!(ids(&result.items), ["b", "w1", "w2", "w3"]);
    }

    #[test]
    fn progress_sort_is_descending() {
        let projects = portfolio();
        let criteria = QueryCriteria::default().with_sort(ProjectSort::Progress);
        let result = query(&projects, &criteria, Pagination::default());
        // 100, 75, 50, 0, 0 (p3 before p4 by input order)
        assert_eq!(ids(&result.items), ["p2", "p1", "p5", "p3", "p4"]);
    }

    #[test]
    fn due_date_sort_puts_finished_projects_last() {
        let projects = portfolio();
        let criteria = QueryCriteria::default().with_sort(ProjectSort::DueDate);
        let result = query(&projects, &criteria, Pagination::default());
        // p3 and p5 tie on 2025-02-10 and keep input order; p2 and p4 have no next milestone.
        assert_eq!(ids(&result.items), ["p3", "p5", "p1", "p2", "p4"]);
    }

    #[test]
    fn search_is_case_insensitive_on_name() {
        let projects = portfolio();
        let criteria = QueryCriteria::<ProjectStatus, ProjectSort> {
            status: StatusFilter::All,
            search: "APP".to_string(),
            sort: None,
        };
        let result = query(&projects, &criteria, Pagination::default());
        assert_eq!(ids(&result.items), ["p3"]);
    }

    #[test]
    fn sort_parse_accepts_labels() {
        assert_eq!("Due Date".parse::<ProjectSort>().unwrap(), ProjectSort::DueDate);
        assert_eq!("percent-complete".parse::<ProjectSort>().unwrap(), ProjectSort::Progress);
        assert!("budget".parse::<ProjectSort>().is_err());
    }
}
