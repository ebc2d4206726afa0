//! Agent task repository trait

use async_trait::async_trait;
use std::fmt::Debug;
use uuid::Uuid;

use super::entity::AgentTask;
use crate::domain::DomainError;

/// Repository trait for agent task storage
#[async_trait]
pub trait AgentTaskRepository: Send + Sync + Debug {
    /// Get a task by id
    async fn get(&self, id: Uuid) -> Result<Option<AgentTask>, DomainError>;

    /// List all tasks, newest first
    async fn list(&self) -> Result<Vec<AgentTask>, DomainError>;

    /// Insert a new task
    async fn create(&self, task: AgentTask) -> Result<AgentTask, DomainError>;

    /// Update an existing task
    async fn update(&self, task: &AgentTask) -> Result<AgentTask, DomainError>;

    /// Delete a task by id; returns whether a row was removed
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Count all tasks
    async fn count(&self) -> Result<u64, DomainError>;
}
