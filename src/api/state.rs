//! Application state for shared services

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::agent::{AgentTask, AgentTaskRepository};
use crate::domain::project::{Project, ProjectRepository};
use crate::domain::user::{User, UserRepository};
use crate::domain::workflow::{Workflow, WorkflowRepository};
use crate::domain::DomainError;
use crate::infrastructure::auth::JwtGenerator;
use crate::infrastructure::services::{
    AgentTaskService, CreateAgentTaskRequest, CreateProjectRequest, CreateWorkflowRequest,
    ProjectService, UpdateAgentTaskRequest, UpdateProjectRequest, UpdateWorkflowRequest,
    WorkflowService,
};
use crate::infrastructure::user::{
    PasswordHasher, RegisterUserRequest, UpdateUserFlagsRequest, UserService,
};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub agent_service: Arc<dyn AgentTaskServiceTrait>,
    pub project_service: Arc<dyn ProjectServiceTrait>,
    pub workflow_service: Arc<dyn WorkflowServiceTrait>,
    pub user_service: Arc<dyn UserServiceTrait>,
    pub jwt_service: Arc<dyn JwtGenerator>,
}

impl AppState {
    /// Create new application state with provided services
    pub fn new(
        agent_service: Arc<dyn AgentTaskServiceTrait>,
        project_service: Arc<dyn ProjectServiceTrait>,
        workflow_service: Arc<dyn WorkflowServiceTrait>,
        user_service: Arc<dyn UserServiceTrait>,
        jwt_service: Arc<dyn JwtGenerator>,
    ) -> Self {
        Self {
            agent_service,
            project_service,
            workflow_service,
            user_service,
            jwt_service,
        }
    }
}

/// Trait for agent task service operations
#[async_trait::async_trait]
pub trait AgentTaskServiceTrait: Send + Sync {
    async fn get(&self, id: Uuid) -> Result<Option<AgentTask>, DomainError>;
    async fn list(&self) -> Result<Vec<AgentTask>, DomainError>;
    async fn count(&self) -> Result<u64, DomainError>;
    async fn create(
        &self,
        request: CreateAgentTaskRequest,
        assigned_to: Uuid,
    ) -> Result<AgentTask, DomainError>;
    async fn update(
        &self,
        id: Uuid,
        request: UpdateAgentTaskRequest,
    ) -> Result<AgentTask, DomainError>;
    async fn delete(&self, id: Uuid) -> Result<(), DomainError>;
}

/// Trait for project service operations
#[async_trait::async_trait]
pub trait ProjectServiceTrait: Send + Sync {
    async fn get(&self, id: Uuid) -> Result<Option<Project>, DomainError>;
    async fn list(&self) -> Result<Vec<Project>, DomainError>;
    async fn count(&self) -> Result<u64, DomainError>;
    async fn create(
        &self,
        request: CreateProjectRequest,
        owner_id: Uuid,
    ) -> Result<Project, DomainError>;
    async fn update(&self, id: Uuid, request: UpdateProjectRequest)
        -> Result<Project, DomainError>;
    async fn delete(&self, id: Uuid) -> Result<(), DomainError>;
}

/// Trait for workflow service operations
#[async_trait::async_trait]
pub trait WorkflowServiceTrait: Send + Sync {
    async fn get(&self, id: Uuid) -> Result<Option<Workflow>, DomainError>;
    async fn list(&self) -> Result<Vec<Workflow>, DomainError>;
    async fn count(&self) -> Result<u64, DomainError>;
    async fn create(
        &self,
        request: CreateWorkflowRequest,
        created_by: Uuid,
    ) -> Result<Workflow, DomainError>;
    async fn update(
        &self,
        id: Uuid,
        request: UpdateWorkflowRequest,
    ) -> Result<Workflow, DomainError>;
    async fn delete(&self, id: Uuid) -> Result<(), DomainError>;
}

/// Trait for user service operations
#[async_trait::async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn register(&self, request: RegisterUserRequest) -> Result<User, DomainError>;
    async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, DomainError>;
    async fn get(&self, id: Uuid) -> Result<Option<User>, DomainError>;
    async fn list(&self) -> Result<Vec<User>, DomainError>;
    async fn count(&self) -> Result<u64, DomainError>;
    async fn update_flags(
        &self,
        id: Uuid,
        request: UpdateUserFlagsRequest,
    ) -> Result<User, DomainError>;
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}

// Implement the state traits for the concrete services

#[async_trait::async_trait]
impl<R: AgentTaskRepository + 'static> AgentTaskServiceTrait for AgentTaskService<R> {
    async fn get(&self, id: Uuid) -> Result<Option<AgentTask>, DomainError> {
        AgentTaskService::get(self, id).await
    }

    async fn list(&self) -> Result<Vec<AgentTask>, DomainError> {
        AgentTaskService::list(self).await
    }

    async fn count(&self) -> Result<u64, DomainError> {
        AgentTaskService::count(self).await
    }

    async fn create(
        &self,
        request: CreateAgentTaskRequest,
        assigned_to: Uuid,
    ) -> Result<AgentTask, DomainError> {
        AgentTaskService::create(self, request, assigned_to).await
    }

    async fn update(
        &self,
        id: Uuid,
        request: UpdateAgentTaskRequest,
    ) -> Result<AgentTask, DomainError> {
        AgentTaskService::update(self, id, request).await
    }

    async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        AgentTaskService::delete(self, id).await
    }
}

#[async_trait::async_trait]
impl<R: ProjectRepository + 'static> ProjectServiceTrait for ProjectService<R> {
    async fn get(&self, id: Uuid) -> Result<Option<Project>, DomainError> {
        ProjectService::get(self, id).await
    }

    async fn list(&self) -> Result<Vec<Project>, DomainError> {
        ProjectService::list(self).await
    }

    async fn count(&self) -> Result<u64, DomainError> {
        ProjectService::count(self).await
    }

    async fn create(
        &self,
        request: CreateProjectRequest,
        owner_id: Uuid,
    ) -> Result<Project, DomainError> {
        ProjectService::create(self, request, owner_id).await
    }

    async fn update(
        &self,
        id: Uuid,
        request: UpdateProjectRequest,
    ) -> Result<Project, DomainError> {
        ProjectService::update(self, id, request).await
    }

    async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        ProjectService::delete(self, id).await
    }
}

#[async_trait::async_trait]
impl<R: WorkflowRepository + 'static> WorkflowServiceTrait for WorkflowService<R> {
    async fn get(&self, id: Uuid) -> Result<Option<Workflow>, DomainError> {
        WorkflowService::get(self, id).await
    }

    async fn list(&self) -> Result<Vec<Workflow>, DomainError> {
        WorkflowService::list(self).await
    }

    async fn count(&self) -> Result<u64, DomainError> {
        WorkflowService::count(self).await
    }

    async fn create(
        &self,
        request: CreateWorkflowRequest,
        created_by: Uuid,
    ) -> Result<Workflow, DomainError> {
        WorkflowService::create(self, request, created_by).await
    }

    async fn update(
        &self,
        id: Uuid,
        request: UpdateWorkflowRequest,
    ) -> Result<Workflow, DomainError> {
        WorkflowService::update(self, id, request).await
    }

    async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        WorkflowService::delete(self, id).await
    }
}

#[async_trait::async_trait]
impl<R: UserRepository + 'static, H: PasswordHasher + 'static> UserServiceTrait
    for UserService<R, H>
{
    async fn register(&self, request: RegisterUserRequest) -> Result<User, DomainError> {
        UserService::register(self, request).await
    }

    async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, DomainError> {
        UserService::authenticate(self, email, password).await
    }

    async fn get(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        UserService::get(self, id).await
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        UserService::list(self).await
    }

    async fn count(&self) -> Result<u64, DomainError> {
        UserService::count(self).await
    }

    async fn update_flags(
        &self,
        id: Uuid,
        request: UpdateUserFlagsRequest,
    ) -> Result<User, DomainError> {
        UserService::update_flags(self, id, request).await
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        UserService::delete(self, id).await
    }
}
