use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use clientdesk_core::{DomainError, Entity, ProjectId};

use crate::derivation;
use crate::milestone::{normalize, Milestone};

/// Project status, derived from its milestones (never stored).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProjectStatus {
    Planning,
    InProgress,
    Completed,
}

impl ProjectStatus {
    /// Display label, as used by dashboard filters.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Planning => "Planning",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Completed => "Completed",
        }
    }
}

impl core::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for ProjectStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "planning" => Ok(ProjectStatus::Planning),
            "inprogress" => Ok(ProjectStatus::InProgress),
            "completed" => Ok(ProjectStatus::Completed),
            _ => Err(DomainError::unknown_option("project status", s)),
        }
    }
}

/// A client project with its ordered milestones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    /// Service category (e.g. "Web Development").
    #[serde(rename = "type")]
    pub project_type: String,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
}

impl Project {
    pub fn new(
        id: impl Into<ProjectId>,
        name: impl Into<String>,
        project_type: impl Into<String>,
        due_date: NaiveDate,
        milestones: Vec<Milestone>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            project_type: project_type.into(),
            due_date,
            milestones,
        }
    }

    pub fn status(&self) -> ProjectStatus {
        derivation::project_status(self)
    }

    pub fn progress(&self) -> u8 {
        derivation::progress_percent(&self.milestones)
    }

    pub fn next_milestone(&self) -> Option<&Milestone> {
        derivation::next_milestone(&self.milestones)
    }

    /// Days until the project's own due date.
    pub fn days_remaining(&self, today: NaiveDate) -> i64 {
        derivation::days_remaining(self.due_date, today)
    }
}

impl Entity for Project {
    type Id = ProjectId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
