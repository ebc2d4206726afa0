//! Workflow repository trait

use async_trait::async_trait;
use std::fmt::Debug;
use uuid::Uuid;

use super::entity::Workflow;
use crate::domain::DomainError;

/// Repository trait for workflow storage
#[async_trait]
pub trait WorkflowRepository: Send + Sync + Debug {
    /// Get a workflow by id
    async fn get(&self, id: Uuid) -> Result<Option<Workflow>, DomainError>;

    /// List all workflows, newest first
    async fn list(&self) -> Result<Vec<Workflow>, DomainError>;

    /// Insert a new workflow
    async fn create(&self, workflow: Workflow) -> Result<Workflow, DomainError>;

    /// Update an existing workflow
    async fn update(&self, workflow: &Workflow) -> Result<Workflow, DomainError>;

    /// Delete a workflow by id; returns whether a row was removed
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Count all workflows
    async fn count(&self) -> Result<u64, DomainError>;
}
