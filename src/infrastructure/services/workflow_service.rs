//! Workflow service

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::workflow::{Workflow, WorkflowRepository};
use crate::domain::DomainError;

/// Request to create a new workflow
#[derive(Debug, Clone, Default)]
pub struct CreateWorkflowRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub definition: Option<serde_json::Value>,
}

/// Partial update for a workflow
#[derive(Debug, Clone, Default)]
pub struct UpdateWorkflowRequest {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub definition: Option<serde_json::Value>,
    pub is_active: Option<bool>,
}

/// Service over workflow storage
#[derive(Debug)]
pub struct WorkflowService<R: WorkflowRepository> {
    repository: Arc<R>,
}

impl<R: WorkflowRepository> WorkflowService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<Workflow>, DomainError> {
        self.repository.get(id).await
    }

    pub async fn list(&self) -> Result<Vec<Workflow>, DomainError> {
        self.repository.list().await
    }

    pub async fn count(&self) -> Result<u64, DomainError> {
        self.repository.count().await
    }

    /// Create a workflow recorded against the caller; name is required
    pub async fn create(
        &self,
        request: CreateWorkflowRequest,
        created_by: Uuid,
    ) -> Result<Workflow, DomainError> {
        let name = match request.name {
            Some(n) if !n.trim().is_empty() => n,
            _ => return Err(DomainError::validation("name is required")),
        };

        let mut workflow =
            Workflow::new(name, created_by).with_description(request.description);

        if let Some(definition) = request.definition {
            workflow = workflow.with_definition(definition);
        }

        self.repository.create(workflow).await
    }

    /// Apply a partial update to a workflow
    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateWorkflowRequest,
    ) -> Result<Workflow, DomainError> {
        let mut workflow = self
            .repository
            .get(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Workflow '{}' not found", id)))?;

        if let Some(name) = request.name {
            workflow.set_name(name);
        }

        if let Some(description) = request.description {
            workflow.set_description(description);
        }

        if let Some(definition) = request.definition {
            workflow.set_definition(definition);
        }

        if let Some(is_active) = request.is_active {
            workflow.set_active(is_active);
        }

        self.repository.update(&workflow).await
    }

    /// Delete a workflow; no existence check, matching the gateway contract
    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        self.repository.delete(id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::workflow::InMemoryWorkflowRepository;

    fn create_service() -> WorkflowService<InMemoryWorkflowRepository> {
        WorkflowService::new(Arc::new(InMemoryWorkflowRepository::new()))
    }

    #[tokio::test]
    async fn test_create_with_defaults() {
        let service = create_service();
        let creator = Uuid::new_v4();

        let workflow = service
            .create(
                CreateWorkflowRequest {
                    name: Some("Nightly".to_string()),
                    ..Default::default()
                },
                creator,
            )
            .await
            .unwrap();

        assert!(workflow.is_active());
        assert_eq!(workflow.created_by(), creator);
        assert_eq!(workflow.definition(), &serde_json::json!({}));
    }

    #[tokio::test]
    async fn test_create_with_definition() {
        let service = create_service();
        let definition = serde_json::json!({"steps": ["build", "test"]});

        let workflow = service
            .create(
                CreateWorkflowRequest {
                    name: Some("CI".to_string()),
                    definition: Some(definition.clone()),
                    ..Default::default()
                },
                Uuid::new_v4(),
            )
            .await
            .unwrap();

        assert_eq!(workflow.definition(), &definition);
    }

    #[tokio::test]
    async fn test_create_missing_name() {
        let service = create_service();

        let result = service
            .create(CreateWorkflowRequest::default(), Uuid::new_v4())
            .await;

        assert!(matches!(result, Err(DomainError::Validation { .. })));
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_deactivates() {
        let service = create_service();

        let workflow = service
            .create(
                CreateWorkflowRequest {
                    name: Some("Nightly".to_string()),
                    ..Default::default()
                },
                Uuid::new_v4(),
            )
            .await
            .unwrap();

        let updated = service
            .update(
                workflow.id(),
                UpdateWorkflowRequest {
                    is_active: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(!updated.is_active());
        assert_eq!(updated.name(), "Nightly");
    }

    #[tokio::test]
    async fn test_update_missing_workflow() {
        let service = create_service();

        let result = service
            .update(Uuid::new_v4(), UpdateWorkflowRequest::default())
            .await;

        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }
}
