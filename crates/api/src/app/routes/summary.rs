use std::sync::Arc;

use axum::{extract::Extension, response::IntoResponse, Json};

use clientdesk_infra::ClientSummary;

use crate::app::errors;
use crate::app::services::AppServices;

/// Client summary: the source's pre-aggregated one when present, else derived.
pub async fn client_summary(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let snapshot = match services.source().snapshot().await {
        Ok(s) => s,
        Err(e) => return errors::source_error_to_response(e),
    };

    let summary = match snapshot.client_summary {
        Some(summary) => summary,
        None => ClientSummary::derive(&snapshot.projects, &snapshot.invoices, services.today()),
    };

    Json(summary).into_response()
}
