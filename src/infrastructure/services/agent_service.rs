//! Agent task service

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::agent::{AgentTask, AgentTaskRepository, TaskPriority, TaskStatus};
use crate::domain::DomainError;

/// Request to create a new agent task
#[derive(Debug, Clone, Default)]
pub struct CreateAgentTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub agent_type: Option<String>,
    pub priority: Option<TaskPriority>,
}

/// Partial update for an agent task
///
/// The fields here are the complete set a caller may change; everything
/// else (id, assignee, timestamps) is server-managed.
#[derive(Debug, Clone, Default)]
pub struct UpdateAgentTaskRequest {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub agent_type: Option<String>,
    pub priority: Option<TaskPriority>,
    pub status: Option<TaskStatus>,
}

/// Service over agent task storage
#[derive(Debug)]
pub struct AgentTaskService<R: AgentTaskRepository> {
    repository: Arc<R>,
}

impl<R: AgentTaskRepository> AgentTaskService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<AgentTask>, DomainError> {
        self.repository.get(id).await
    }

    pub async fn list(&self) -> Result<Vec<AgentTask>, DomainError> {
        self.repository.list().await
    }

    pub async fn count(&self) -> Result<u64, DomainError> {
        self.repository.count().await
    }

    /// Create a task assigned to the caller; title and agent_type are required
    pub async fn create(
        &self,
        request: CreateAgentTaskRequest,
        assigned_to: Uuid,
    ) -> Result<AgentTask, DomainError> {
        let title = required_field(request.title, "title")?;
        let agent_type = required_field(request.agent_type, "agent_type")?;

        let task = AgentTask::new(title, agent_type, assigned_to)
            .with_description(request.description)
            .with_priority(request.priority.unwrap_or_default());

        self.repository.create(task).await
    }

    /// Apply a partial update to a task
    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateAgentTaskRequest,
    ) -> Result<AgentTask, DomainError> {
        let mut task = self
            .repository
            .get(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Agent task '{}' not found", id)))?;

        if let Some(title) = request.title {
            task.set_title(title);
        }

        if let Some(description) = request.description {
            task.set_description(description);
        }

        if let Some(agent_type) = request.agent_type {
            task.set_agent_type(agent_type);
        }

        if let Some(priority) = request.priority {
            task.set_priority(priority);
        }

        if let Some(status) = request.status {
            task.set_status(status);
        }

        self.repository.update(&task).await
    }

    /// Delete a task; no existence check, matching the gateway contract
    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        self.repository.delete(id).await?;
        Ok(())
    }
}

fn required_field(value: Option<String>, name: &str) -> Result<String, DomainError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(DomainError::validation(format!("{} is required", name))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::agent::InMemoryAgentTaskRepository;

    fn create_service() -> AgentTaskService<InMemoryAgentTaskRepository> {
        AgentTaskService::new(Arc::new(InMemoryAgentTaskRepository::new()))
    }

    fn make_request(title: Option<&str>, agent_type: Option<&str>) -> CreateAgentTaskRequest {
        CreateAgentTaskRequest {
            title: title.map(String::from),
            agent_type: agent_type.map(String::from),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_with_defaults() {
        let service = create_service();
        let caller = Uuid::new_v4();

        let task = service
            .create(make_request(Some("Review PR"), Some("code_review")), caller)
            .await
            .unwrap();

        assert_eq!(task.status(), TaskStatus::Pending);
        assert_eq!(task.priority(), TaskPriority::Medium);
        assert_eq!(task.assigned_to(), caller);
    }

    #[tokio::test]
    async fn test_create_missing_title() {
        let service = create_service();

        let result = service
            .create(make_request(None, Some("code_review")), Uuid::new_v4())
            .await;

        assert!(matches!(result, Err(DomainError::Validation { .. })));
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_blank_title() {
        let service = create_service();

        let result = service
            .create(make_request(Some("   "), Some("code_review")), Uuid::new_v4())
            .await;

        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_create_missing_agent_type() {
        let service = create_service();

        let result = service
            .create(make_request(Some("Review PR"), None), Uuid::new_v4())
            .await;

        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_update_partial() {
        let service = create_service();

        let task = service
            .create(make_request(Some("Review PR"), Some("code_review")), Uuid::new_v4())
            .await
            .unwrap();

        let updated = service
            .update(
                task.id(),
                UpdateAgentTaskRequest {
                    status: Some(TaskStatus::InProgress),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.status(), TaskStatus::InProgress);
        // Untouched fields survive
        assert_eq!(updated.title(), "Review PR");
        assert_eq!(updated.agent_type(), "code_review");
    }

    #[tokio::test]
    async fn test_update_clears_description() {
        let service = create_service();

        let task = service
            .create(
                CreateAgentTaskRequest {
                    title: Some("Review PR".to_string()),
                    agent_type: Some("code_review".to_string()),
                    description: Some("Check error paths".to_string()),
                    priority: None,
                },
                Uuid::new_v4(),
            )
            .await
            .unwrap();

        let updated = service
            .update(
                task.id(),
                UpdateAgentTaskRequest {
                    description: Some(None),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(updated.description().is_none());
    }

    #[tokio::test]
    async fn test_update_missing_task() {
        let service = create_service();

        let result = service
            .update(Uuid::new_v4(), UpdateAgentTaskRequest::default())
            .await;

        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete_is_silent_on_missing() {
        let service = create_service();

        assert!(service.delete(Uuid::new_v4()).await.is_ok());
    }
}
