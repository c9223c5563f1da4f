//! Skill Match - skill-based matching service for staffing project work
//!
//! This library provides the scoring and ranking engine that shortlists
//! employees for a project based on overlapping, leveled skills, plus the
//! record store and HTTP layer around it.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Matcher, MatchResult, ordinal, score_candidate, score_skill_pair};
pub use models::{Level, Skill, Candidate, RequirementSet, ScoredCandidate, Project};
pub use services::{MatchService, MatchError, RecordStore, StoreError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        assert_eq!(ordinal(Level::Expert), 3);
        assert_eq!(Matcher::default().limit(), 5);
    }
}
