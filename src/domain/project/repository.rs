//! Project repository trait

use async_trait::async_trait;
use std::fmt::Debug;
use uuid::Uuid;

use super::entity::Project;
use crate::domain::DomainError;

/// Repository trait for project storage
#[async_trait]
pub trait ProjectRepository: Send + Sync + Debug {
    /// Get a project by id
    async fn get(&self, id: Uuid) -> Result<Option<Project>, DomainError>;

    /// List all projects, newest first
    async fn list(&self) -> Result<Vec<Project>, DomainError>;

    /// Insert a new project
    async fn create(&self, project: Project) -> Result<Project, DomainError>;

    /// Update an existing project
    async fn update(&self, project: &Project) -> Result<Project, DomainError>;

    /// Delete a project by id; returns whether a row was removed
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Count all projects
    async fn count(&self) -> Result<u64, DomainError>;
}
