use std::sync::RwLock;

use clientdesk_invoicing::Invoice;
use clientdesk_projects::Project;

use super::{DashboardSnapshot, DashboardSource, SourceError};
use crate::projections::client_summary::ClientSummary;

/// In-memory source for tests/dev (mock data, JSON fixtures).
#[derive(Debug, Default)]
pub struct InMemoryDashboardSource {
    inner: RwLock<DashboardSnapshot>,
}

impl InMemoryDashboardSource {
    pub fn new(snapshot: DashboardSnapshot) -> Self {
        Self {
            inner: RwLock::new(snapshot),
        }
    }

    /// Swap in a freshly fetched snapshot.
    pub fn replace(&self, snapshot: DashboardSnapshot) {
        if let Ok(mut guard) = self.inner.write() {
            tracing::debug!(
                invoices = snapshot.invoices.len(),
                projects = snapshot.projects.len(),
                "dashboard snapshot replaced"
            );
            *guard = snapshot;
        }
    }

    fn read(&self) -> Result<DashboardSnapshot, SourceError> {
        self.inner
            .read()
            .map(|guard| guard.clone())
            .map_err(|_| SourceError::Unavailable("snapshot lock poisoned".to_string()))
    }
}

#[async_trait::async_trait]
impl DashboardSource for InMemoryDashboardSource {
    async fn invoices(&self) -> Result<Vec<Invoice>, SourceError> {
        Ok(self.read()?.invoices)
    }

    async fn projects(&self) -> Result<Vec<Project>, SourceError> {
        Ok(self.read()?.projects)
    }

    async fn client_summary(&self) -> Result<Option<ClientSummary>, SourceError> {
        Ok(self.read()?.client_summary)
    }

    async fn snapshot(&self) -> Result<DashboardSnapshot, SourceError> {
        self.read()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[tokio::test]
    async fn serves_and_replaces_snapshot() {
        let source = InMemoryDashboardSource::new(fixtures::demo_snapshot());
        assert_eq!(source.invoices().await.unwrap().len(), 8);
        assert!(!source.projects().await.unwrap().is_empty());
        assert!(source.client_summary().await.unwrap().is_none());

        source.replace(DashboardSnapshot::default());
        assert!(source.invoices().await.unwrap().is_empty());
        assert!(source.snapshot().await.unwrap().projects.is_empty());
    }

    #[test]
    fn snapshot_loads_from_json() {
        let json = r#"{
            "invoices": [
                {"id":"i1","number":"INV-001","date":"2025-03-15","amount":1200,"status":"overdue"}
            ],
            "projects": [
                {"id":"p1","name":"Site","type":"Web","dueDate":"2025-09-01","milestones":[
                    {"id":"m1","title":"Design","status":"done","dueDate":"2025-04-01"}
                ]}
            ]
        }"#;
        let snapshot = DashboardSnapshot::from_json_str(json).unwrap();
        assert_eq!(snapshot.invoices.len(), 1);
        assert_eq!(snapshot.projects[0].milestones.len(), 1);
        assert!(snapshot.client_summary.is_none());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = DashboardSnapshot::from_json_str(r#"{"invoices": [{"id": 1}]}"#).unwrap_err();
        assert!(matches!(err, SourceError::Parse(_)));
    }
}
