use crate::models::{Candidate, Project, ProjectNote, RequirementSet, Skill};
use crate::services::store::{project_not_found, RecordStore, StoreError};
use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Default)]
struct Records {
    employees: Vec<Candidate>,
    projects: Vec<Project>,
}

/// In-process record store
///
/// Keeps records in insertion order. Used for local development and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Records>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with the given records
    pub fn with_records(employees: Vec<Candidate>, projects: Vec<Project>) -> Self {
        Self {
            records: RwLock::new(Records { employees, projects }),
        }
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn find_requirement_set_by_project_id(&self, project_id: Uuid) -> Result<RequirementSet, StoreError> {
        let records = self.records.read().await;
        records
            .projects
            .iter()
            .find(|p| p.id == project_id)
            .map(Project::requirement_set)
            .ok_or_else(|| project_not_found(project_id))
    }

    async fn list_all_candidates(&self) -> Result<Vec<Candidate>, StoreError> {
        Ok(self.records.read().await.employees.clone())
    }

    async fn add_candidate(&self, name: String, skills: Vec<Skill>) -> Result<Candidate, StoreError> {
        let candidate = Candidate {
            id: Uuid::new_v4(),
            name,
            skills,
        };
        self.records.write().await.employees.push(candidate.clone());
        Ok(candidate)
    }

    async fn add_project(&self, project_name: String, required_skills: Vec<Skill>) -> Result<Project, StoreError> {
        let project = Project {
            id: Uuid::new_v4(),
            project_name,
            required_skills,
            notes: vec![],
        };
        self.records.write().await.projects.push(project.clone());
        Ok(project)
    }

    async fn list_projects(&self) -> Result<Vec<Project>, StoreError> {
        Ok(self.records.read().await.projects.clone())
    }

    async fn delete_project(&self, project_id: Uuid) -> Result<(), StoreError> {
        let mut records = self.records.write().await;
        let before = records.projects.len();
        records.projects.retain(|p| p.id != project_id);

        if records.projects.len() == before {
            return Err(project_not_found(project_id));
        }
        Ok(())
    }

    async fn add_note(&self, project_id: Uuid, description: String) -> Result<Project, StoreError> {
        let mut records = self.records.write().await;
        let project = records
            .projects
            .iter_mut()
            .find(|p| p.id == project_id)
            .ok_or_else(|| project_not_found(project_id))?;

        project.notes.push(ProjectNote {
            id: Uuid::new_v4(),
            description,
            created_at: chrono::Utc::now(),
        });
        Ok(project.clone())
    }

    async fn delete_note(&self, project_id: Uuid, note_id: Uuid) -> Result<Project, StoreError> {
        let mut records = self.records.write().await;
        let project = records
            .projects
            .iter_mut()
            .find(|p| p.id == project_id)
            .ok_or_else(|| project_not_found(project_id))?;

        let before = project.notes.len();
        project.notes.retain(|n| n.id != note_id);
        if project.notes.len() == before {
            return Err(StoreError::NotFound(format!("Note {}", note_id)));
        }
        Ok(project.clone())
    }

    async fn health_check(&self) -> Result<bool, StoreError> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Level;

    #[tokio::test]
    async fn test_candidates_keep_insertion_order() {
        let store = MemoryStore::new();
        store.add_candidate("First".into(), vec![]).await.unwrap();
        store.add_candidate("Second".into(), vec![]).await.unwrap();

        let names: Vec<String> = store
            .list_all_candidates()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["First", "Second"]);
    }

    #[tokio::test]
    async fn test_requirement_set_lookup() {
        let store = MemoryStore::new();
        let project = store
            .add_project("Billing".into(), vec![Skill::new("SQL", Level::Expert)])
            .await
            .unwrap();

        let requirements = store.find_requirement_set_by_project_id(project.id).await.unwrap();
        assert_eq!(requirements.project_id, project.id);
        assert_eq!(requirements.required_skills.len(), 1);

        let missing = store.find_requirement_set_by_project_id(Uuid::new_v4()).await;
        assert!(matches!(missing, Err(StoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_notes_lifecycle() {
        let store = MemoryStore::new();
        let project = store.add_project("Billing".into(), vec![]).await.unwrap();

        let updated = store.add_note(project.id, "Kickoff on Monday".into()).await.unwrap();
        assert_eq!(updated.notes.len(), 1);

        let note_id = updated.notes[0].id;
        let updated = store.delete_note(project.id, note_id).await.unwrap();
        assert!(updated.notes.is_empty());

        let again = store.delete_note(project.id, note_id).await;
        assert!(matches!(again, Err(StoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_project() {
        let store = MemoryStore::new();
        let project = store.add_project("Billing".into(), vec![]).await.unwrap();

        store.delete_project(project.id).await.unwrap();
        assert!(store.list_projects().await.unwrap().is_empty());
        assert!(store.delete_project(project.id).await.is_err());
    }
}
