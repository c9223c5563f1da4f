// Route exports
pub mod matches;
pub mod records;

use actix_web::{error, http::StatusCode, web, HttpRequest, HttpResponse};
use crate::models::ErrorResponse;
use crate::services::{MatchService, StoreError};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub service: MatchService,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(matches::configure)
            .configure(records::configure),
    );
}

/// Register the JSON, query and path extractor error handlers
pub fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
        .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
        .app_data(web::PathConfig::default().error_handler(handle_path_error));
}

/// JSON error body for extractor failures
#[derive(Debug)]
pub struct JsonError(ErrorResponse);

impl JsonError {
    fn bad_request(error: &str, message: String) -> Self {
        JsonError(ErrorResponse {
            error: error.to_string(),
            message,
            status_code: 400,
        })
    }
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.0.error, self.0.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.0.status_code).unwrap_or(StatusCode::BAD_REQUEST)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(&self.0)
    }
}

/// Handle JSON payload errors, including unknown skill levels
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError::bad_request("invalid_json", format!("Invalid JSON: {}", err)).into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    JsonError::bad_request("invalid_query", format!("Invalid query: {}", err)).into()
}

/// Handle malformed path segments such as non-UUID ids
pub fn handle_path_error(err: error::PathError, _req: &HttpRequest) -> actix_web::Error {
    JsonError::bad_request("invalid_path", format!("Invalid path: {}", err)).into()
}

pub(crate) fn error_response(status: StatusCode, error: &str, message: String) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: status.as_u16(),
    })
}

pub(crate) fn validation_error(errors: validator::ValidationErrors) -> HttpResponse {
    error_response(StatusCode::BAD_REQUEST, "Validation failed", errors.to_string())
}

/// Map a record store failure to a response
pub(crate) fn store_error_response(context: &str, not_found: &str, err: StoreError) -> HttpResponse {
    match err {
        StoreError::NotFound(what) => error_response(StatusCode::NOT_FOUND, not_found, what),
        StoreError::ContractViolation(msg) => {
            tracing::error!("{}: malformed record: {}", context, msg);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Malformed record", msg)
        }
        other => {
            tracing::error!("{}: {}", context, other);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, context, other.to_string())
        }
    }
}
