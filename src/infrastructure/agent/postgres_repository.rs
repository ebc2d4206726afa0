//! PostgreSQL agent task repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::agent::{AgentTask, AgentTaskRepository, TaskPriority, TaskStatus};
use crate::domain::DomainError;

const TASK_COLUMNS: &str = "id, title, description, agent_type, priority, status, \
                            assigned_to, created_at, updated_at";

/// PostgreSQL implementation of AgentTaskRepository
#[derive(Debug, Clone)]
pub struct PostgresAgentTaskRepository {
    pool: PgPool,
}

impl PostgresAgentTaskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AgentTaskRepository for PostgresAgentTaskRepository {
    async fn get(&self, id: Uuid) -> Result<Option<AgentTask>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM agent_tasks WHERE id = $1",
            TASK_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get agent task: {}", e)))?;

        row.map(|r| row_to_task(&r)).transpose()
    }

    async fn list(&self) -> Result<Vec<AgentTask>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM agent_tasks ORDER BY created_at DESC",
            TASK_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list agent tasks: {}", e)))?;

        rows.iter().map(row_to_task).collect()
    }

    async fn create(&self, task: AgentTask) -> Result<AgentTask, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO agent_tasks (id, title, description, agent_type, priority, status,
                                     assigned_to, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(task.id())
        .bind(task.title())
        .bind(task.description())
        .bind(task.agent_type())
        .bind(task.priority().as_str())
        .bind(task.status().as_str())
        .bind(task.assigned_to())
        .bind(task.created_at())
        .bind(task.updated_at())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create agent task: {}", e)))?;

        Ok(task)
    }

    async fn update(&self, task: &AgentTask) -> Result<AgentTask, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE agent_tasks
            SET title = $2, description = $3, agent_type = $4, priority = $5,
                status = $6, updated_at = $7
            WHERE id = $1
            "#,
        )
        .bind(task.id())
        .bind(task.title())
        .bind(task.description())
        .bind(task.agent_type())
        .bind(task.priority().as_str())
        .bind(task.status().as_str())
        .bind(task.updated_at())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to update agent task: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(format!(
                "Agent task '{}' not found",
                task.id()
            )));
        }

        Ok(task.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM agent_tasks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete agent task: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM agent_tasks")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to count agent tasks: {}", e)))?;

        Ok(count as u64)
    }
}

fn row_to_task(row: &sqlx::postgres::PgRow) -> Result<AgentTask, DomainError> {
    let priority: String = row.get("priority");
    let status: String = row.get("status");

    Ok(AgentTask::from_parts(
        row.get("id"),
        row.get("title"),
        row.get("description"),
        row.get("agent_type"),
        str_to_priority(&priority),
        str_to_status(&status),
        row.get("assigned_to"),
        row.get("created_at"),
        row.get("updated_at"),
    ))
}

fn str_to_priority(s: &str) -> TaskPriority {
    match s {
        "low" => TaskPriority::Low,
        "high" => TaskPriority::High,
        _ => TaskPriority::Medium,
    }
}

fn str_to_status(s: &str) -> TaskStatus {
    match s {
        "in_progress" => TaskStatus::InProgress,
        "completed" => TaskStatus::Completed,
        "failed" => TaskStatus::Failed,
        _ => TaskStatus::Pending,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_conversion() {
        assert_eq!(str_to_priority("low"), TaskPriority::Low);
        assert_eq!(str_to_priority("medium"), TaskPriority::Medium);
        assert_eq!(str_to_priority("high"), TaskPriority::High);
        assert_eq!(str_to_priority("unknown"), TaskPriority::Medium);
    }

    #[test]
    fn test_status_conversion() {
        assert_eq!(str_to_status("pending"), TaskStatus::Pending);
        assert_eq!(str_to_status("in_progress"), TaskStatus::InProgress);
        assert_eq!(str_to_status("completed"), TaskStatus::Completed);
        assert_eq!(str_to_status("failed"), TaskStatus::Failed);
        assert_eq!(str_to_status("unknown"), TaskStatus::Pending);
    }
}
