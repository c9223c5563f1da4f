use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;
use crate::models::domain::Skill;

/// Request to match employees against a project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchProjectRequest {
    #[serde(alias = "project_id", rename = "projectId")]
    pub project_id: Uuid,
}

/// Request to add an employee
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddEmployeeRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(nested)]
    #[serde(default)]
    pub skills: Vec<Skill>,
}

/// Request to add a project
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddProjectRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "project_name", rename = "projectName")]
    pub project_name: String,
    #[validate(nested)]
    #[serde(alias = "required_skills", rename = "requiredSkills", default)]
    pub required_skills: Vec<Skill>,
}

/// Request to attach a note to a project
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddNoteRequest {
    #[validate(length(min = 1))]
    pub description: String,
}
