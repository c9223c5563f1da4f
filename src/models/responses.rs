use serde::{Deserialize, Serialize};
use crate::models::domain::{Candidate, Project, ScoredCandidate};

/// Response for the match endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResponse {
    #[serde(rename = "topEmployees")]
    pub top_employees: Vec<ScoredCandidate>,
}

/// Response after adding an employee
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCreatedResponse {
    pub message: String,
    pub employee: Candidate,
}

/// Response after adding a project or changing its notes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectResponse {
    pub message: String,
    pub project: Project,
}

/// Plain acknowledgement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
