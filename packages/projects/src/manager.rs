// ABOUTME: Project manager with CRUD operations over SQLite
// ABOUTME: Owns the hand-off from a completed scoping session to a tracked project

use chrono::{DateTime, Utc};
use nacscope_core::{DeploymentModel, ScopingSession};
use sqlx::{Row, SqlitePool};
use thiserror::Error;
use tracing::{debug, info};

use crate::types::{Project, ProjectStatus};

const SCHEMA: &str = include_str!("../migrations/001_projects.sql");

/// Manager errors
#[derive(Error, Debug)]
pub enum ProjectError {
    #[error("Project not found: {0}")]
    NotFound(String),
    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("Invalid stored value: {0}")]
    InvalidStored(String),
}

pub type Result<T> = std::result::Result<T, ProjectError>;

pub struct ProjectManager {
    pool: SqlitePool,
}

impl ProjectManager {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Run the schema migration; safe to call repeatedly
    pub async fn init_schema(&self) -> Result<()> {
        sqlx::raw_sql(SCHEMA).execute(&self.pool).await?;
        Ok(())
    }

    /// Turn a finished scoping session into a tracked deployment
    /// project. Name and organization come from the document.
    pub async fn create_project_from_session(&self, session: &ScopingSession) -> Result<Project> {
        let organization = session.business_foundation.organization.name.clone();
        let name = if organization.is_empty() {
            format!("{} deployment", session.name)
        } else {
            format!("{} NAC deployment", organization)
        };

        let now = Utc::now();
        let project = Project {
            id: nanoid::nanoid!(8),
            name,
            organization,
            status: ProjectStatus::Planned,
            deployment_model: session.solution_architecture.deployment_model,
            primary_vendor: session.solution_architecture.primary_vendor.clone(),
            source_session_id: session.id.clone(),
            created_at: now,
            updated_at: now,
        };
        info!(
            "Creating project {} from session {}",
            project.id, session.id
        );

        sqlx::query(
            "INSERT INTO projects (id, name, organization, status, deployment_model, primary_vendor, source_session_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
        )
        .bind(&project.id)
        .bind(&project.name)
        .bind(&project.organization)
        .bind(project.status.as_str())
        .bind(project.deployment_model.as_str())
        .bind(&project.primary_vendor)
        .bind(&project.source_session_id)
        .bind(project.created_at.to_rfc3339())
        .bind(project.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(project)
    }

    pub async fn get_project(&self, id: &str) -> Result<Option<Project>> {
        let row = sqlx::query("SELECT * FROM projects WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(Self::row_to_project).transpose()
    }

    pub async fn list_projects(&self) -> Result<Vec<Project>> {
        debug!("Listing projects");
        let rows = sqlx::query("SELECT * FROM projects ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(Self::row_to_project).collect()
    }

    pub async fn update_status(&self, id: &str, status: ProjectStatus) -> Result<Project> {
        let result = sqlx::query("UPDATE projects SET status = $1, updated_at = $2 WHERE id = $3")
            .bind(status.as_str())
            .bind(Utc::now().to_rfc3339())
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(ProjectError::NotFound(id.to_string()));
        }
        self.get_project(id)
            .await?
            .ok_or_else(|| ProjectError::NotFound(id.to_string()))
    }

    fn row_to_project(row: &sqlx::sqlite::SqliteRow) -> Result<Project> {
        let status: String = row.get("status");
        let deployment_model: String = row.get("deployment_model");
        let created_at: String = row.get("created_at");
        let updated_at: String = row.get("updated_at");

        Ok(Project {
            id: row.get("id"),
            name: row.get("name"),
            organization: row.get("organization"),
            status: ProjectStatus::parse(&status)
                .ok_or_else(|| ProjectError::InvalidStored(format!("status: {}", status)))?,
            deployment_model: DeploymentModel::parse(&deployment_model).ok_or_else(|| {
                ProjectError::InvalidStored(format!("deployment_model: {}", deployment_model))
            })?,
            primary_vendor: row.get("primary_vendor"),
            source_session_id: row.get("source_session_id"),
            created_at: parse_timestamp(&created_at)?,
            updated_at: parse_timestamp(&updated_at)?,
        })
    }
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    value
        .parse()
        .map_err(|e| ProjectError::InvalidStored(format!("timestamp: {}", e)))
}
