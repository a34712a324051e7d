use std::sync::Arc;

use anyhow::Context;

use clientdesk_api::app::{self, services::AppServices};
use clientdesk_api::config::ApiConfig;
use clientdesk_infra::{fixtures, DashboardSnapshot, InMemoryDashboardSource};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ApiConfig::from_env().context("invalid configuration")?;
    clientdesk_observability::init_with(config.log_format);

    let snapshot = match &config.data_file {
        Some(path) => DashboardSnapshot::from_json_file(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => {
            tracing::warn!("CLIENTDESK_DATA_FILE not set; serving built-in demo data");
            fixtures::demo_snapshot()
        }
    };
    tracing::info!(
        invoices = snapshot.invoices.len(),
        projects = snapshot.projects.len(),
        "dashboard data loaded"
    );

    let source = Arc::new(InMemoryDashboardSource::new(snapshot));
    let services = Arc::new(AppServices::new(source, config.clock()));
    let app = app::build_app(services);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
