//! Project service

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::project::{Project, ProjectRepository, ProjectStatus};
use crate::domain::DomainError;

/// Request to create a new project
#[derive(Debug, Clone, Default)]
pub struct CreateProjectRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<ProjectStatus>,
    pub requirements: Option<String>,
}

/// Partial update for a project
#[derive(Debug, Clone, Default)]
pub struct UpdateProjectRequest {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub status: Option<ProjectStatus>,
    pub requirements: Option<Option<String>>,
}

/// Service over project storage
#[derive(Debug)]
pub struct ProjectService<R: ProjectRepository> {
    repository: Arc<R>,
}

impl<R: ProjectRepository> ProjectService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<Project>, DomainError> {
        self.repository.get(id).await
    }

    pub async fn list(&self) -> Result<Vec<Project>, DomainError> {
        self.repository.list().await
    }

    pub async fn count(&self) -> Result<u64, DomainError> {
        self.repository.count().await
    }

    /// Create a project owned by the caller; name is required
    pub async fn create(
        &self,
        request: CreateProjectRequest,
        owner_id: Uuid,
    ) -> Result<Project, DomainError> {
        let name = match request.name {
            Some(n) if !n.trim().is_empty() => n,
            _ => return Err(DomainError::validation("name is required")),
        };

        let project = Project::new(name, owner_id)
            .with_description(request.description)
            .with_status(request.status.unwrap_or_default())
            .with_requirements(request.requirements);

        self.repository.create(project).await
    }

    /// Apply a partial update to a project
    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateProjectRequest,
    ) -> Result<Project, DomainError> {
        let mut project = self
            .repository
            .get(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Project '{}' not found", id)))?;

        if let Some(name) = request.name {
            project.set_name(name);
        }

        if let Some(description) = request.description {
            project.set_description(description);
        }

        if let Some(status) = request.status {
            project.set_status(status);
        }

        if let Some(requirements) = request.requirements {
            project.set_requirements(requirements);
        }

        self.repository.update(&project).await
    }

    /// Delete a project; no existence check, matching the gateway contract
    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        self.repository.delete(id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::project::InMemoryProjectRepository;

    fn create_service() -> ProjectService<InMemoryProjectRepository> {
        ProjectService::new(Arc::new(InMemoryProjectRepository::new()))
    }

    #[tokio::test]
    async fn test_create_with_defaults() {
        let service = create_service();
        let owner = Uuid::new_v4();

        let project = service
            .create(
                CreateProjectRequest {
                    name: Some("Demo".to_string()),
                    ..Default::default()
                },
                owner,
            )
            .await
            .unwrap();

        assert_eq!(project.name(), "Demo");
        assert_eq!(project.status(), ProjectStatus::Planning);
        assert_eq!(project.owner_id(), owner);
    }

    #[tokio::test]
    async fn test_create_with_explicit_status() {
        let service = create_service();

        let project = service
            .create(
                CreateProjectRequest {
                    name: Some("Live".to_string()),
                    status: Some(ProjectStatus::Active),
                    ..Default::default()
                },
                Uuid::new_v4(),
            )
            .await
            .unwrap();

        assert_eq!(project.status(), ProjectStatus::Active);
    }

    #[tokio::test]
    async fn test_create_missing_name() {
        let service = create_service();

        let result = service
            .create(CreateProjectRequest::default(), Uuid::new_v4())
            .await;

        assert!(matches!(result, Err(DomainError::Validation { .. })));
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_partial() {
        let service = create_service();

        let project = service
            .create(
                CreateProjectRequest {
                    name: Some("Demo".to_string()),
                    description: Some("First cut".to_string()),
                    ..Default::default()
                },
                Uuid::new_v4(),
            )
            .await
            .unwrap();

        let updated = service
            .update(
                project.id(),
                UpdateProjectRequest {
                    status: Some(ProjectStatus::Completed),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.status(), ProjectStatus::Completed);
        assert_eq!(updated.description(), Some("First cut"));
    }

    #[tokio::test]
    async fn test_update_missing_project() {
        let service = create_service();

        let result = service
            .update(Uuid::new_v4(), UpdateProjectRequest::default())
            .await;

        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }
}
