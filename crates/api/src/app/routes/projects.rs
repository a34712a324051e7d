use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use clientdesk_core::{find_by_id, DomainError, ProjectId};
use clientdesk_projects::ProjectStatus;
use clientdesk_query::{query, ProjectSort, QueryCriteria};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_projects))
        .route("/:id", get(get_project))
}

pub async fn list_projects(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<dto::ListParams>,
) -> axum::response::Response {
    let criteria: QueryCriteria<ProjectStatus, ProjectSort> = match params.criteria() {
        Ok(c) => c,
        Err(e) => return errors::domain_error_to_response(e),
    };
    let pagination = match params.pagination() {
        Ok(p) => p,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let projects = match services.source().projects().await {
        Ok(v) => v,
        Err(e) => return errors::source_error_to_response(e),
    };

    let today = services.today();
    let result = query(&projects, &criteria, pagination);
    Json(dto::PageResponse::from_result(result, |p| {
        dto::ProjectView::new(p, today)
    }))
    .into_response()
}

pub async fn get_project(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ProjectId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let projects = match services.source().projects().await {
        Ok(v) => v,
        Err(e) => return errors::source_error_to_response(e),
    };

    match find_by_id(&projects, &id) {
        Some(project) => Json(dto::ProjectView::new(project, services.today())).into_response(),
        None => errors::domain_error_to_response(DomainError::not_found()),
    }
}
