use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use clientdesk_core::{DomainError, Entity, MilestoneId};

/// Three-state completion status of a milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MilestoneStatus {
    Pending,
    InProgress,
    Done,
}

impl MilestoneStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MilestoneStatus::Pending => "pending",
            MilestoneStatus::InProgress => "inProgress",
            MilestoneStatus::Done => "done",
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, MilestoneStatus::Done)
    }
}

impl core::fmt::Display for MilestoneStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for MilestoneStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "pending" => Ok(MilestoneStatus::Pending),
            "inprogress" => Ok(MilestoneStatus::InProgress),
            "done" => Ok(MilestoneStatus::Done),
            _ => Err(DomainError::unknown_option("milestone status", s)),
        }
    }
}

/// Lowercase and drop separators so `"In Progress"`, `"in-progress"` and
/// `"inProgress"` all compare equal.
pub(crate) fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// A dated sub-task of a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub id: MilestoneId,
    pub title: String,
    pub status: MilestoneStatus,
    pub due_date: NaiveDate,
}

impl Milestone {
    pub fn new(
        id: impl Into<MilestoneId>,
        title: impl Into<String>,
        status: MilestoneStatus,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            status,
            due_date,
        }
    }
}

impl Entity for Milestone {
    type Id = MilestoneId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
