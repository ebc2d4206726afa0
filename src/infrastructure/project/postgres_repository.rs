//! PostgreSQL project repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::project::{Project, ProjectRepository, ProjectStatus};
use crate::domain::DomainError;

const PROJECT_COLUMNS: &str = "id, name, description, status, requirements, owner_id, \
                               created_at, updated_at";

/// PostgreSQL implementation of ProjectRepository
#[derive(Debug, Clone)]
pub struct PostgresProjectRepository {
    pool: PgPool,
}

impl PostgresProjectRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectRepository for PostgresProjectRepository {
    async fn get(&self, id: Uuid) -> Result<Option<Project>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM projects WHERE id = $1",
            PROJECT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get project: {}", e)))?;

        row.map(|r| row_to_project(&r)).transpose()
    }

    async fn list(&self) -> Result<Vec<Project>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM projects ORDER BY created_at DESC",
            PROJECT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list projects: {}", e)))?;

        rows.iter().map(row_to_project).collect()
    }

    async fn create(&self, project: Project) -> Result<Project, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO projects (id, name, description, status, requirements, owner_id,
                                  created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(project.id())
        .bind(project.name())
        .bind(project.description())
        .bind(project.status().as_str())
        .bind(project.requirements())
        .bind(project.owner_id())
        .bind(project.created_at())
        .bind(project.updated_at())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create project: {}", e)))?;

        Ok(project)
    }

    async fn update(&self, project: &Project) -> Result<Project, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE projects
            SET name = $2, description = $3, status = $4, requirements = $5, updated_at = $6
            WHERE id = $1
            "#,
        )
        .bind(project.id())
        .bind(project.name())
        .bind(project.description())
        .bind(project.status().as_str())
        .bind(project.requirements())
        .bind(project.updated_at())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to update project: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(format!(
                "Project '{}' not found",
                project.id()
            )));
        }

        Ok(project.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete project: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM projects")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to count projects: {}", e)))?;

        Ok(count as u64)
    }
}

fn row_to_project(row: &sqlx::postgres::PgRow) -> Result<Project, DomainError> {
    let status: String = row.get("status");

    Ok(Project::from_parts(
        row.get("id"),
        row.get("name"),
        row.get("description"),
        str_to_status(&status),
        row.get("requirements"),
        row.get("owner_id"),
        row.get("created_at"),
        row.get("updated_at"),
    ))
}

fn str_to_status(s: &str) -> ProjectStatus {
    match s {
        "active" => ProjectStatus::Active,
        "completed" => ProjectStatus::Completed,
        "cancelled" => ProjectStatus::Cancelled,
        _ => ProjectStatus::Planning,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_conversion() {
        assert_eq!(str_to_status("planning"), ProjectStatus::Planning);
        assert_eq!(str_to_status("active"), ProjectStatus::Active);
        assert_eq!(str_to_status("completed"), ProjectStatus::Completed);
        assert_eq!(str_to_status("cancelled"), ProjectStatus::Cancelled);
        assert_eq!(str_to_status("unknown"), ProjectStatus::Planning);
    }
}
