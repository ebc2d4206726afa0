//! In-memory project repository for the memory storage backend and tests

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::project::{Project, ProjectRepository};
use crate::domain::DomainError;

/// In-memory implementation of ProjectRepository
#[derive(Debug, Default)]
pub struct InMemoryProjectRepository {
    projects: RwLock<HashMap<Uuid, Project>>,
}

impl InMemoryProjectRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn get(&self, id: Uuid) -> Result<Option<Project>, DomainError> {
        let projects = self.projects.read().await;
        Ok(projects.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Project>, DomainError> {
        let projects = self.projects.read().await;

        let mut result: Vec<Project> = projects.values().cloned().collect();
        result.sort_by(|a, b| b.created_at().cmp(&a.created_at()));

        Ok(result)
    }

    async fn create(&self, project: Project) -> Result<Project, DomainError> {
        let mut projects = self.projects.write().await;
        projects.insert(project.id(), project.clone());
        Ok(project)
    }

    async fn update(&self, project: &Project) -> Result<Project, DomainError> {
        let mut projects = self.projects.write().await;

        if !projects.contains_key(&project.id()) {
            return Err(DomainError::not_found(format!(
                "Project '{}' not found",
                project.id()
            )));
        }

        projects.insert(project.id(), project.clone());
        Ok(project.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut projects = self.projects.write().await;
        Ok(projects.remove(&id).is_some())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let projects = self.projects.read().await;
        Ok(projects.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_get_delete() {
        let repo = InMemoryProjectRepository::new();
        let project = Project::new("Demo", Uuid::new_v4());

        repo.create(project.clone()).await.unwrap();
        assert!(repo.get(project.id()).await.unwrap().is_some());

        assert!(repo.delete(project.id()).await.unwrap());
        assert!(repo.get(project.id()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let repo = InMemoryProjectRepository::new();
        let owner = Uuid::new_v4();

        for i in 0..3 {
            repo.create(Project::new(format!("project {}", i), owner))
                .await
                .unwrap();
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        }

        let projects = repo.list().await.unwrap();
        assert_eq!(projects.len(), 3);
        assert_eq!(projects[0].name(), "project 2");
    }

    #[tokio::test]
    async fn test_update_missing() {
        let repo = InMemoryProjectRepository::new();
        let project = Project::new("Orphan", Uuid::new_v4());

        assert!(repo.update(&project).await.is_err());
    }
}
