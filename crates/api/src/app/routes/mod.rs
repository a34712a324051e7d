use axum::{routing::get, Router};

pub mod invoices;
pub mod projects;
pub mod summary;
pub mod system;

/// Router for all dashboard endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/summary", get(summary::client_summary))
        .nest("/invoices", invoices::router())
        .nest("/projects", projects::router())
}
