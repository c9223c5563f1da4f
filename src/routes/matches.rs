use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use crate::models::{HealthResponse, MatchProjectRequest, MatchResponse};
use crate::routes::{error_response, AppState};
use crate::services::MatchError;

/// Configure match and health routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/match/project", web::post().to(match_project));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let store_healthy = state.service.store().health_check().await.unwrap_or(false);

    let status = if store_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Match employees to a project
///
/// POST /api/match/project
///
/// Request body:
/// ```json
/// { "projectId": "uuid" }
/// ```
///
/// Responds with up to the configured shortlist size of
/// `{ "employee": {...}, "score": n }` entries under `topEmployees`.
async fn match_project(
    state: web::Data<AppState>,
    req: web::Json<MatchProjectRequest>,
) -> impl Responder {
    let project_id = req.project_id;

    tracing::info!("Matching employees to project: {}", project_id);

    match state.service.match_project(project_id).await {
        Ok(result) => HttpResponse::Ok().json(MatchResponse {
            top_employees: result.matches,
        }),
        Err(MatchError::ReferenceNotFound(id)) => {
            tracing::info!("Project {} not found", id);
            error_response(
                StatusCode::NOT_FOUND,
                "Project not found",
                format!("No project with id {}", id),
            )
        }
        Err(MatchError::ContractViolation(msg)) => {
            tracing::error!("Malformed record while matching project {}: {}", project_id, msg);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Malformed record", msg)
        }
        Err(e) => {
            tracing::error!("Failed to match employees for {}: {}", project_id, e);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to match employees",
                e.to_string(),
            )
        }
    }
}
