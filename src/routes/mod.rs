//! HTTP handlers for the `/api` scope and the response helpers they share.

use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, web};

use crate::dto::api::ErrorDto;
use crate::services::{ServiceError, ServiceResult};

pub mod clients;
pub mod dashboard;
pub mod health;
pub mod leads;
pub mod notes;

/// Registers every API route under `/api`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(leads::list_leads)
            .service(leads::create_lead)
            .service(notes::list_notes)
            .service(notes::add_note)
            .service(leads::get_lead)
            .service(leads::update_lead)
            .service(leads::delete_lead)
            .service(clients::list_clients)
            .service(clients::create_client)
            .service(clients::delete_client)
            .service(dashboard::show_dashboard)
            .service(health::health),
    );
}

/// Builds a `{"error": ...}` response with the given status.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(ErrorDto {
        error: message.into(),
    })
}

/// Maps a failed service call onto a status code.
///
/// Store faults keep their raw message after the `action` prefix.
pub fn failure_response(err: ServiceError, action: &str) -> HttpResponse {
    match err {
        ServiceError::Form(message) | ServiceError::TypeConstraint(message) => {
            error_response(StatusCode::BAD_REQUEST, message)
        }
        ServiceError::NotFound => error_response(StatusCode::NOT_FOUND, "Not found"),
        err => error_response(StatusCode::INTERNAL_SERVER_ERROR, format!("{action}: {err}")),
    }
}

/// Runs blocking repository work on the blocking thread pool.
pub(crate) async fn blocking<F, T>(f: F) -> ServiceResult<T>
where
    F: FnOnce() -> ServiceResult<T> + Send + 'static,
    T: Send + 'static,
{
    web::block(f)
        .await
        .map_err(|err| ServiceError::Internal(err.to_string()))?
}

/// Rejects malformed JSON bodies with a 400 `{"error"}` response.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = error_response(StatusCode::BAD_REQUEST, format!("Invalid JSON body: {err}"));
        InternalError::from_response(err, response).into()
    })
}

/// Treats unparsable path identifiers as unknown resources.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        let response = error_response(StatusCode::NOT_FOUND, "Not found");
        InternalError::from_response(err, response).into()
    })
}

/// Fallback for unknown routes.
pub async fn not_found() -> HttpResponse {
    error_response(StatusCode::NOT_FOUND, "Not found")
}
