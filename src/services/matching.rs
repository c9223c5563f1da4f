use crate::core::{Matcher, MatchResult};
use crate::services::store::{RecordStore, StoreError};
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

/// Errors surfaced by a matching request
#[derive(Debug, Error)]
pub enum MatchError {
    /// The project id does not resolve to a requirement set
    #[error("Project not found: {0}")]
    ReferenceNotFound(Uuid),

    /// A record carries data outside the model, e.g. an unknown skill level
    #[error("Malformed record: {0}")]
    ContractViolation(String),

    #[error("Record store error: {0}")]
    Store(StoreError),
}

impl MatchError {
    fn from_lookup(project_id: Uuid, err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => MatchError::ReferenceNotFound(project_id),
            other => Self::from(other),
        }
    }
}

impl From<StoreError> for MatchError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::ContractViolation(msg) => MatchError::ContractViolation(msg),
            other => MatchError::Store(other),
        }
    }
}

/// Resolves the inputs of a matching request and runs the ranking engine
#[derive(Clone)]
pub struct MatchService {
    store: Arc<dyn RecordStore>,
    matcher: Matcher,
}

impl MatchService {
    pub fn new(store: Arc<dyn RecordStore>, matcher: Matcher) -> Self {
        Self { store, matcher }
    }

    pub fn store(&self) -> &Arc<dyn RecordStore> {
        &self.store
    }

    /// Shortlist the best-fit employees for a project
    ///
    /// An empty shortlist is a valid result. Failures are never retried.
    pub async fn match_project(&self, project_id: Uuid) -> Result<MatchResult, MatchError> {
        let requirements = self
            .store
            .find_requirement_set_by_project_id(project_id)
            .await
            .map_err(|e| MatchError::from_lookup(project_id, e))?;

        let candidates = self.store.list_all_candidates().await?;

        tracing::debug!(
            "Scoring {} candidates against {} required skills for project {}",
            candidates.len(),
            requirements.required_skills.len(),
            project_id
        );

        let result = self.matcher.rank(&requirements, candidates);

        tracing::info!(
            "Matched {} employees for project {} (from {} candidates)",
            result.matches.len(),
            project_id,
            result.total_candidates
        );

        Ok(result)
    }
}
