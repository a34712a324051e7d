//! Data-access port for dashboard collections.
//!
//! The dashboard core only sees resolved snapshots; where they come from
//! (HTTP backend, fixtures, a JSON file) is hidden behind [`DashboardSource`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use clientdesk_invoicing::Invoice;
use clientdesk_projects::Project;

use crate::projections::client_summary::ClientSummary;

pub mod in_memory;

pub use in_memory::InMemoryDashboardSource;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read dashboard data: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse dashboard data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("dashboard source unavailable: {0}")]
    Unavailable(String),
}

/// Everything the dashboard fetches for one client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    #[serde(default)]
    pub invoices: Vec<Invoice>,
    #[serde(default)]
    pub projects: Vec<Project>,
    /// Pre-aggregated summary, when the backend supplies one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_summary: Option<ClientSummary>,
}

impl DashboardSnapshot {
    pub fn from_json_str(json: &str) -> Result<Self, SourceError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<std::path::Path>) -> Result<Self, SourceError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
}

/// Async data-access port.
#[async_trait::async_trait]
pub trait DashboardSource: Send + Sync {
    async fn invoices(&self) -> Result<Vec<Invoice>, SourceError>;

    async fn projects(&self) -> Result<Vec<Project>, SourceError>;

    /// Optional pre-aggregated summary; `None` means "derive it yourself".
    async fn client_summary(&self) -> Result<Option<ClientSummary>, SourceError>;

    /// Fetch everything at once (one consistent snapshot where supported).
    async fn snapshot(&self) -> Result<DashboardSnapshot, SourceError> {
        Ok(DashboardSnapshot {
            invoices: self.invoices().await?,
            projects: self.projects().await?,
            client_summary: self.client_summary().await?,
        })
    }
}

#[async_trait::async_trait]
impl<S> DashboardSource for std::sync::Arc<S>
where
    S: DashboardSource + ?Sized,
{
    async fn invoices(&self) -> Result<Vec<Invoice>, SourceError> {
        (**self).invoices().await
    }

    async fn projects(&self) -> Result<Vec<Project>, SourceError> {
        (**self).projects().await
    }

    async fn client_summary(&self) -> Result<Option<ClientSummary>, SourceError> {
        (**self).client_summary().await
    }

    async fn snapshot(&self) -> Result<DashboardSnapshot, SourceError> {
        (**self).snapshot().await
    }
}
