use actix_web::{web, HttpResponse, Responder};
use uuid::Uuid;
use validator::Validate;
use crate::models::{
    AddEmployeeRequest, AddNoteRequest, AddProjectRequest, EmployeeCreatedResponse,
    MessageResponse, ProjectResponse,
};
use crate::routes::{store_error_response, validation_error, AppState};

/// Configure employee, project and note routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/employees/add", web::post().to(add_employee))
        .route("/employees/all", web::get().to(list_employees))
        .route("/projects/add", web::post().to(add_project))
        .route("/projects/all", web::get().to(list_projects))
        .route("/projects/{id}", web::delete().to(delete_project))
        .route("/projects/{id}/notes", web::post().to(add_note))
        .route("/projects/{project_id}/notes/{note_id}", web::delete().to(delete_note));
}

/// POST /api/employees/add
async fn add_employee(
    state: web::Data<AppState>,
    req: web::Json<AddEmployeeRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    let AddEmployeeRequest { name, skills } = req.into_inner();

    match state.service.store().add_candidate(name, skills).await {
        Ok(employee) => {
            tracing::info!("Added employee {} ({} skills)", employee.id, employee.skills.len());
            HttpResponse::Created().json(EmployeeCreatedResponse {
                message: "Employee added successfully".to_string(),
                employee,
            })
        }
        Err(e) => store_error_response("Failed to add employee", "Employee not found", e),
    }
}

/// GET /api/employees/all
async fn list_employees(state: web::Data<AppState>) -> impl Responder {
    match state.service.store().list_all_candidates().await {
        Ok(employees) => HttpResponse::Ok().json(employees),
        Err(e) => store_error_response("Failed to fetch employees", "Employee not found", e),
    }
}

/// POST /api/projects/add
async fn add_project(
    state: web::Data<AppState>,
    req: web::Json<AddProjectRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    let AddProjectRequest { project_name, required_skills } = req.into_inner();

    match state.service.store().add_project(project_name, required_skills).await {
        Ok(project) => {
            tracing::info!("Added project {} ({} required skills)", project.id, project.required_skills.len());
            HttpResponse::Created().json(ProjectResponse {
                message: "Project added successfully".to_string(),
                project,
            })
        }
        Err(e) => store_error_response("Failed to add project", "Project not found", e),
    }
}

/// GET /api/projects/all
async fn list_projects(state: web::Data<AppState>) -> impl Responder {
    match state.service.store().list_projects().await {
        Ok(projects) => HttpResponse::Ok().json(projects),
        Err(e) => store_error_response("Failed to fetch projects", "Project not found", e),
    }
}

/// DELETE /api/projects/{id}
async fn delete_project(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let project_id = path.into_inner();

    match state.service.store().delete_project(project_id).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse {
            message: "Project deleted successfully".to_string(),
        }),
        Err(e) => store_error_response("Failed to delete project", "Project not found", e),
    }
}

/// POST /api/projects/{id}/notes
async fn add_note(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    req: web::Json<AddNoteRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    let project_id = path.into_inner();

    match state.service.store().add_note(project_id, req.into_inner().description).await {
        Ok(project) => HttpResponse::Created().json(ProjectResponse {
            message: "Note added successfully".to_string(),
            project,
        }),
        Err(e) => store_error_response("Failed to add note", "Project not found", e),
    }
}

/// DELETE /api/projects/{project_id}/notes/{note_id}
async fn delete_note(
    state: web::Data<AppState>,
    path: web::Path<(Uuid, Uuid)>,
) -> impl Responder {
    let (project_id, note_id) = path.into_inner();

    match state.service.store().delete_note(project_id, note_id).await {
        Ok(project) => HttpResponse::Ok().json(ProjectResponse {
            message: "Note deleted successfully".to_string(),
            project,
        }),
        Err(e) => store_error_response("Failed to delete note", "Not found", e),
    }
}
