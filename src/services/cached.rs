use crate::models::{Candidate, Project, RequirementSet, Skill};
use crate::services::cache::{CacheError, CacheKey, CacheManager};
use crate::services::store::{RecordStore, StoreError};
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Record store decorator that caches the two lookups used for matching
///
/// Cache failures never fail a request; they are logged and the inner store
/// is used instead. Writes invalidate the keys they affect.
///
/// Every invalidation bumps a write epoch. A read remembers the epoch it
/// started under and only fills the cache if no invalidation happened while
/// it was fetching, so a slow reader cannot put back a snapshot that a
/// concurrent write already discarded.
pub struct CachedStore {
    inner: Arc<dyn RecordStore>,
    cache: Arc<CacheManager>,
    epoch: Mutex<u64>,
}

impl CachedStore {
    pub fn new(inner: Arc<dyn RecordStore>, cache: Arc<CacheManager>) -> Self {
        Self {
            inner,
            cache,
            epoch: Mutex::new(0),
        }
    }

    async fn current_epoch(&self) -> u64 {
        *self.epoch.lock().await
    }

    async fn cached<T>(&self, key: &str) -> Option<T>
    where
        T: DeserializeOwned,
    {
        match self.cache.get(key).await {
            Ok(value) => Some(value),
            Err(CacheError::CacheMiss(_)) => None,
            Err(e) => {
                tracing::warn!("Cache read failed for {}: {}", key, e);
                None
            }
        }
    }

    /// Fill `key` unless an invalidation happened after `started_at`
    async fn store<T: Serialize>(&self, key: &str, value: &T, started_at: u64) {
        // Held across the set so an invalidation cannot slip in between the
        // epoch check and the write.
        let epoch = self.epoch.lock().await;
        if *epoch != started_at {
            tracing::debug!("Skipping cache fill for {}: invalidated during fetch", key);
            return;
        }
        if let Err(e) = self.cache.set(key, value).await {
            tracing::warn!("Cache write failed for {}: {}", key, e);
        }
    }

    async fn invalidate(&self, key: &str) {
        let mut epoch = self.epoch.lock().await;
        *epoch = epoch.wrapping_add(1);
        if let Err(e) = self.cache.delete(key).await {
            tracing::warn!("Failed to invalidate cache key {}: {}", key, e);
        }
    }
}

#[async_trait]
impl RecordStore for CachedStore {
    async fn find_requirement_set_by_project_id(&self, project_id: Uuid) -> Result<RequirementSet, StoreError> {
        let key = CacheKey::requirements(&project_id);
        if let Some(requirements) = self.cached(&key).await {
            return Ok(requirements);
        }

        let started_at = self.current_epoch().await;
        let requirements = self.inner.find_requirement_set_by_project_id(project_id).await?;
        self.store(&key, &requirements, started_at).await;
        Ok(requirements)
    }

    async fn list_all_candidates(&self) -> Result<Vec<Candidate>, StoreError> {
        let key = CacheKey::candidate_pool();
        if let Some(candidates) = self.cached(&key).await {
            return Ok(candidates);
        }

        let started_at = self.current_epoch().await;
        let candidates = self.inner.list_all_candidates().await?;
        self.store(&key, &candidates, started_at).await;
        Ok(candidates)
    }

    async fn add_candidate(&self, name: String, skills: Vec<Skill>) -> Result<Candidate, StoreError> {
        let candidate = self.inner.add_candidate(name, skills).await?;
        self.invalidate(&CacheKey::candidate_pool()).await;
        Ok(candidate)
    }

    async fn add_project(&self, project_name: String, required_skills: Vec<Skill>) -> Result<Project, StoreError> {
        self.inner.add_project(project_name, required_skills).await
    }

    async fn list_projects(&self) -> Result<Vec<Project>, StoreError> {
        self.inner.list_projects().await
    }

    async fn delete_project(&self, project_id: Uuid) -> Result<(), StoreError> {
        self.inner.delete_project(project_id).await?;
        self.invalidate(&CacheKey::requirements(&project_id)).await;
        Ok(())
    }

    async fn add_note(&self, project_id: Uuid, description: String) -> Result<Project, StoreError> {
        self.inner.add_note(project_id, description).await
    }

    async fn delete_note(&self, project_id: Uuid, note_id: Uuid) -> Result<Project, StoreError> {
        self.inner.delete_note(project_id, note_id).await
    }

    async fn health_check(&self) -> Result<bool, StoreError> {
        self.inner.health_check().await
    }
}
