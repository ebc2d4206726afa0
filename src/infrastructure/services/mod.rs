//! Resource services - validation, defaults and owner stamping on top of
//! the repositories

mod agent_service;
mod project_service;
mod workflow_service;

pub use agent_service::{AgentTaskService, CreateAgentTaskRequest, UpdateAgentTaskRequest};
pub use project_service::{CreateProjectRequest, ProjectService, UpdateProjectRequest};
pub use workflow_service::{CreateWorkflowRequest, UpdateWorkflowRequest, WorkflowService};
