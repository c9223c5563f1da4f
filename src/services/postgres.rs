use crate::models::{Candidate, Project, ProjectNote, RequirementSet, Skill};
use crate::services::store::{project_not_found, RecordStore, StoreError};
use async_trait::async_trait;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::types::Json;
use sqlx::{PgPool, Row};
use std::time::Duration;
use uuid::Uuid;

/// PostgreSQL-backed record store
///
/// Skills are kept as `jsonb` arrays on the employee and project rows; notes
/// live in their own table. Rows are read back in insertion order so the
/// candidate pool has a stable enumeration order.
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Create a new store from a connection string and run migrations
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
        acquire_timeout: Duration,
        idle_timeout: Duration,
    ) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(acquire_timeout)
            .idle_timeout(idle_timeout)
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new store from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
        acquire_timeout_secs: Option<u64>,
        idle_timeout_secs: Option<u64>,
    ) -> Result<Self, StoreError> {
        tracing::info!("Connecting to PostgreSQL");

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
            Duration::from_secs(acquire_timeout_secs.unwrap_or(5)),
            Duration::from_secs(idle_timeout_secs.unwrap_or(600)),
        )
        .await
    }

    async fn fetch_project(&self, project_id: Uuid) -> Result<Project, StoreError> {
        let row = sqlx::query("SELECT id, project_name, required_skills FROM projects WHERE id = $1")
            .bind(project_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| project_not_found(project_id))?;

        let mut project = project_from_row(&row)?;
        project.notes = self.fetch_notes(project_id).await?;
        Ok(project)
    }

    async fn fetch_notes(&self, project_id: Uuid) -> Result<Vec<ProjectNote>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, description, created_at
            FROM project_notes
            WHERE project_id = $1
            ORDER BY created_at, id
            "#,
        )
        .bind(project_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(note_from_row).collect()
    }
}

/// Decode a `jsonb` skills column, rejecting levels outside the scale
fn skills_from_row(row: &PgRow, column: &str) -> Result<Vec<Skill>, StoreError> {
    let value: serde_json::Value = row.try_get(column)?;
    serde_json::from_value(value)
        .map_err(|e| StoreError::ContractViolation(format!("{}: {}", column, e)))
}

fn candidate_from_row(row: &PgRow) -> Result<Candidate, StoreError> {
    Ok(Candidate {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        skills: skills_from_row(row, "skills")?,
    })
}

fn project_from_row(row: &PgRow) -> Result<Project, StoreError> {
    Ok(Project {
        id: row.try_get("id")?,
        project_name: row.try_get("project_name")?,
        required_skills: skills_from_row(row, "required_skills")?,
        notes: vec![],
    })
}

fn note_from_row(row: &PgRow) -> Result<ProjectNote, StoreError> {
    Ok(ProjectNote {
        id: row.try_get("id")?,
        description: row.try_get("description")?,
        created_at: row.try_get("created_at")?,
    })
}

#[async_trait]
impl RecordStore for PostgresStore {
    async fn find_requirement_set_by_project_id(&self, project_id: Uuid) -> Result<RequirementSet, StoreError> {
        let row = sqlx::query("SELECT required_skills FROM projects WHERE id = $1")
            .bind(project_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| project_not_found(project_id))?;

        Ok(RequirementSet {
            project_id,
            required_skills: skills_from_row(&row, "required_skills")?,
        })
    }

    async fn list_all_candidates(&self) -> Result<Vec<Candidate>, StoreError> {
        let rows = sqlx::query("SELECT id, name, skills FROM employees ORDER BY created_at, id")
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!("Loaded {} employees", rows.len());

        rows.iter().map(candidate_from_row).collect()
    }

    async fn add_candidate(&self, name: String, skills: Vec<Skill>) -> Result<Candidate, StoreError> {
        let candidate = Candidate {
            id: Uuid::new_v4(),
            name,
            skills,
        };

        sqlx::query("INSERT INTO employees (id, name, skills) VALUES ($1, $2, $3)")
            .bind(candidate.id)
            .bind(&candidate.name)
            .bind(Json(&candidate.skills))
            .execute(&self.pool)
            .await?;

        tracing::debug!("Inserted employee {}", candidate.id);

        Ok(candidate)
    }

    async fn add_project(&self, project_name: String, required_skills: Vec<Skill>) -> Result<Project, StoreError> {
        let project = Project {
            id: Uuid::new_v4(),
            project_name,
            required_skills,
            notes: vec![],
        };

        sqlx::query("INSERT INTO projects (id, project_name, required_skills) VALUES ($1, $2, $3)")
            .bind(project.id)
            .bind(&project.project_name)
            .bind(Json(&project.required_skills))
            .execute(&self.pool)
            .await?;

        Ok(project)
    }

    async fn list_projects(&self) -> Result<Vec<Project>, StoreError> {
        let rows = sqlx::query("SELECT id, project_name, required_skills FROM projects ORDER BY created_at, id")
            .fetch_all(&self.pool)
            .await?;

        let mut projects = Vec::with_capacity(rows.len());
        for row in &rows {
            let mut project = project_from_row(row)?;
            project.notes = self.fetch_notes(project.id).await?;
            projects.push(project);
        }
        Ok(projects)
    }

    async fn delete_project(&self, project_id: Uuid) -> Result<(), StoreError> {
        // Notes go with the project (ON DELETE CASCADE)
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(project_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(project_not_found(project_id));
        }

        tracing::info!("Deleted project {}", project_id);
        Ok(())
    }

    async fn add_note(&self, project_id: Uuid, description: String) -> Result<Project, StoreError> {
        let mut tx = self.pool.begin().await?;

        // Row lock keeps a concurrent delete_project out until the note is in
        let exists = sqlx::query("SELECT 1 FROM projects WHERE id = $1 FOR SHARE")
            .bind(project_id)
            .fetch_optional(&mut *tx)
            .await?;
        if exists.is_none() {
            return Err(project_not_found(project_id));
        }

        sqlx::query(
            r#"
            INSERT INTO project_notes (id, project_id, description, created_at)
            VALUES ($1, $2, $3, NOW())
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(project_id)
        .bind(&description)
        .execute(&mut *tx)
        .await
        .map_err(|e| missing_project_as_not_found(e, project_id))?;

        tx.commit().await?;

        self.fetch_project(project_id).await
    }

    async fn delete_note(&self, project_id: Uuid, note_id: Uuid) -> Result<Project, StoreError> {
        let result = sqlx::query("DELETE FROM project_notes WHERE project_id = $1 AND id = $2")
            .bind(project_id)
            .bind(note_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(format!("Note {}", note_id)));
        }

        self.fetch_project(project_id).await
    }

    /// Health check for the database connection
    async fn health_check(&self) -> Result<bool, StoreError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}

/// A foreign key violation on a note insert means the project is gone
fn missing_project_as_not_found(err: sqlx::Error, project_id: Uuid) -> StoreError {
    match &err {
        sqlx::Error::Database(db) if db.is_foreign_key_violation() => project_not_found(project_id),
        _ => StoreError::SqlxError(err),
    }
}
