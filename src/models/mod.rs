// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Level, Skill, Candidate, RequirementSet, Project, ProjectNote, ScoredCandidate};
pub use requests::{MatchProjectRequest, AddEmployeeRequest, AddProjectRequest, AddNoteRequest};
pub use responses::{MatchResponse, EmployeeCreatedResponse, ProjectResponse, MessageResponse, HealthResponse, ErrorResponse};
