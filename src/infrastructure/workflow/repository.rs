//! In-memory workflow repository for the memory storage backend and tests

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::workflow::{Workflow, WorkflowRepository};
use crate::domain::DomainError;

/// In-memory implementation of WorkflowRepository
#[derive(Debug, Default)]
pub struct InMemoryWorkflowRepository {
    workflows: RwLock<HashMap<Uuid, Workflow>>,
}

impl InMemoryWorkflowRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WorkflowRepository for InMemoryWorkflowRepository {
    async fn get(&self, id: Uuid) -> Result<Option<Workflow>, DomainError> {
        let workflows = self.workflows.read().await;
        Ok(workflows.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Workflow>, DomainError> {
        let workflows = self.workflows.read().await;

        let mut result: Vec<Workflow> = workflows.values().cloned().collect();
        result.sort_by(|a, b| b.created_at().cmp(&a.created_at()));

        Ok(result)
    }

    async fn create(&self, workflow: Workflow) -> Result<Workflow, DomainError> {
        let mut workflows = self.workflows.write().await;
        workflows.insert(workflow.id(), workflow.clone());
        Ok(workflow)
    }

    async fn update(&self, workflow: &Workflow) -> Result<Workflow, DomainError> {
        let mut workflows = self.workflows.write().await;

        if !workflows.contains_key(&workflow.id()) {
            return Err(DomainError::not_found(format!(
                "Workflow '{}' not found",
                workflow.id()
            )));
        }

        workflows.insert(workflow.id(), workflow.clone());
        Ok(workflow.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut workflows = self.workflows.write().await;
        Ok(workflows.remove(&id).is_some())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let workflows = self.workflows.read().await;
        Ok(workflows.len() as u64)
    }
}
