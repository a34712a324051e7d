use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use clientdesk_core::DomainError;
use clientdesk_infra::SourceError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::UnknownOption { .. } => {
            json_error(StatusCode::BAD_REQUEST, "unknown_option", err.to_string())
        }
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
    }
}

pub fn source_error_to_response(err: SourceError) -> axum::response::Response {
    tracing::error!(error = %err, "dashboard source failed");
    json_error(StatusCode::BAD_GATEWAY, "source_error", err.to_string())
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
