use crate::models::{Candidate, Project, RequirementSet, Skill};
use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur when reading or writing records
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Not found: {0}")]
    NotFound(String),

    /// A persisted record does not fit the data model (e.g. an unknown skill level)
    #[error("Malformed record: {0}")]
    ContractViolation(String),

    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Record store holding employees and projects
///
/// The matching engine only needs [`find_requirement_set_by_project_id`] and
/// [`list_all_candidates`]; the rest backs the record endpoints.
///
/// [`find_requirement_set_by_project_id`]: RecordStore::find_requirement_set_by_project_id
/// [`list_all_candidates`]: RecordStore::list_all_candidates
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Resolve a project's requirement set, or `StoreError::NotFound`
    async fn find_requirement_set_by_project_id(&self, project_id: Uuid) -> Result<RequirementSet, StoreError>;

    /// Every known candidate, in insertion order
    async fn list_all_candidates(&self) -> Result<Vec<Candidate>, StoreError>;

    async fn add_candidate(&self, name: String, skills: Vec<Skill>) -> Result<Candidate, StoreError>;

    async fn add_project(&self, project_name: String, required_skills: Vec<Skill>) -> Result<Project, StoreError>;

    async fn list_projects(&self) -> Result<Vec<Project>, StoreError>;

    async fn delete_project(&self, project_id: Uuid) -> Result<(), StoreError>;

    /// Attach a note and return the updated project
    async fn add_note(&self, project_id: Uuid, description: String) -> Result<Project, StoreError>;

    /// Remove a note and return the updated project
    async fn delete_note(&self, project_id: Uuid, note_id: Uuid) -> Result<Project, StoreError>;

    async fn health_check(&self) -> Result<bool, StoreError>;
}

pub(crate) fn project_not_found(project_id: Uuid) -> StoreError {
    StoreError::NotFound(format!("Project {}", project_id))
}
