use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Proficiency level on the three-point scale
///
/// Serialized as `beginner`, `intermediate`, `expert`. Input goes through
/// `Level::parse`, which also accepts the record names used by older clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Level {
    Beginner,
    Intermediate,
    Expert,
}

/// A named capability held (or required) at a given level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Skill {
    #[validate(length(min = 1))]
    pub name: String,
    pub level: Level,
}

impl Skill {
    pub fn new(name: impl Into<String>, level: Level) -> Self {
        Self {
            name: name.into(),
            level,
        }
    }
}

/// A person eligible for matching against a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

/// The skills a project declares as needed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementSet {
    #[serde(rename = "projectId")]
    pub project_id: Uuid,
    #[serde(rename = "requiredSkills")]
    pub required_skills: Vec<Skill>,
}

/// A free-text note attached to a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectNote {
    pub id: Uuid,
    pub description: String,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Project record as kept by the record store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    #[serde(rename = "projectName")]
    pub project_name: String,
    #[serde(rename = "requiredSkills", default)]
    pub required_skills: Vec<Skill>,
    #[serde(default)]
    pub notes: Vec<ProjectNote>,
}

impl Project {
    pub fn requirement_set(&self) -> RequirementSet {
        RequirementSet {
            project_id: self.id,
            required_skills: self.required_skills.clone(),
        }
    }
}

/// Candidate with its score for one matching request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    #[serde(rename = "employee")]
    pub candidate: Candidate,
    pub score: u32,
}
