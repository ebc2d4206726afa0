//! PostgreSQL workflow repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::workflow::{Workflow, WorkflowRepository};
use crate::domain::DomainError;

const WORKFLOW_COLUMNS: &str = "id, name, description, definition, is_active, created_by, \
                                created_at, updated_at";

/// PostgreSQL implementation of WorkflowRepository
///
/// The definition column is JSONB and is passed through untouched.
#[derive(Debug, Clone)]
pub struct PostgresWorkflowRepository {
    pool: PgPool,
}

impl PostgresWorkflowRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WorkflowRepository for PostgresWorkflowRepository {
    async fn get(&self, id: Uuid) -> Result<Option<Workflow>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM workflows WHERE id = $1",
            WORKFLOW_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get workflow: {}", e)))?;

        row.map(|r| row_to_workflow(&r)).transpose()
    }

    async fn list(&self) -> Result<Vec<Workflow>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM workflows ORDER BY created_at DESC",
            WORKFLOW_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list workflows: {}", e)))?;

        rows.iter().map(row_to_workflow).collect()
    }

    async fn create(&self, workflow: Workflow) -> Result<Workflow, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO workflows (id, name, description, definition, is_active, created_by,
                                   created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(workflow.id())
        .bind(workflow.name())
        .bind(workflow.description())
        .bind(workflow.definition())
        .bind(workflow.is_active())
        .bind(workflow.created_by())
        .bind(workflow.created_at())
        .bind(workflow.updated_at())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create workflow: {}", e)))?;

        Ok(workflow)
    }

    async fn update(&self, workflow: &Workflow) -> Result<Workflow, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE workflows
            SET name = $2, description = $3, definition = $4, is_active = $5, updated_at = $6
            WHERE id = $1
            "#,
        )
        .bind(workflow.id())
        .bind(workflow.name())
        .bind(workflow.description())
        .bind(workflow.definition())
        .bind(workflow.is_active())
        .bind(workflow.updated_at())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to update workflow: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(format!(
                "Workflow '{}' not found",
                workflow.id()
            )));
        }

        Ok(workflow.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM workflows WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete workflow: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM workflows")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to count workflows: {}", e)))?;

        Ok(count as u64)
    }
}

fn row_to_workflow(row: &sqlx::postgres::PgRow) -> Result<Workflow, DomainError> {
    Ok(Workflow::from_parts(
        row.get("id"),
        row.get("name"),
        row.get("description"),
        row.get("definition"),
        row.get("is_active"),
        row.get("created_by"),
        row.get("created_at"),
        row.get("updated_at"),
    ))
}
