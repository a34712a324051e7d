use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::Datelike;

use clientdesk_invoicing::{next_due_invoice, outstanding_balance, total_paid, InvoiceStatus};
use clientdesk_query::{query, InvoiceSort, QueryCriteria};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_invoices))
        .route("/summary", get(invoice_summary))
}

pub async fn list_invoices(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<dto::ListParams>,
) -> axum::response::Response {
    let criteria: QueryCriteria<InvoiceStatus, InvoiceSort> = match params.criteria() {
        Ok(c) => c,
        Err(e) => return errors::domain_error_to_response(e),
    };
    let pagination = match params.pagination() {
        Ok(p) => p,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let invoices = match services.source().invoices().await {
        Ok(v) => v,
        Err(e) => return errors::source_error_to_response(e),
    };

    let result = query(&invoices, &criteria, pagination);
    Json(dto::PageResponse::from_result(result, |inv| inv)).into_response()
}

pub async fn invoice_summary(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<dto::InvoiceSummaryParams>,
) -> axum::response::Response {
    let year = match params.year() {
        Ok(y) => y,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let invoices = match services.source().invoices().await {
        Ok(v) => v,
        Err(e) => return errors::source_error_to_response(e),
    };

    let year = year.unwrap_or_else(|| services.today().year());

    Json(dto::InvoiceSummaryResponse {
        year,
        outstanding_balance: outstanding_balance(&invoices),
        total_paid: total_paid(&invoices, year),
        next_due_invoice: next_due_invoice(&invoices),
    })
    .into_response()
}
