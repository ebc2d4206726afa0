//! Agent task endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Router,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::api::middleware::RequireUser;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::agent::{AgentTask, TaskPriority, TaskStatus};
use crate::infrastructure::services::{CreateAgentTaskRequest, UpdateAgentTaskRequest};

/// Create the agent task router
pub fn create_agents_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_agents))
        .route("/", post(create_agent))
        .route("/{agent_id}", get(get_agent))
        .route("/{agent_id}", put(update_agent))
        .route("/{agent_id}", delete(delete_agent))
}

/// Request to create a new agent task
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAgentTaskApiRequest {
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub agent_type: Option<String>,
    #[serde(default)]
    pub priority: Option<TaskPriority>,
}

/// Request to update an agent task
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAgentTaskApiRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub agent_type: Option<String>,
    pub priority: Option<TaskPriority>,
    pub status: Option<TaskStatus>,
}

/// Agent task response
#[derive(Debug, Clone, Serialize)]
pub struct AgentTaskResponse {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub agent_type: String,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub assigned_to: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&AgentTask> for AgentTaskResponse {
    fn from(task: &AgentTask) -> Self {
        Self {
            id: task.id().to_string(),
            title: task.title().to_string(),
            description: task.description().map(String::from),
            agent_type: task.agent_type().to_string(),
            priority: task.priority(),
            status: task.status(),
            assigned_to: task.assigned_to().to_string(),
            created_at: task.created_at().to_rfc3339(),
            updated_at: task.updated_at().to_rfc3339(),
        }
    }
}

/// List agent tasks response
#[derive(Debug, Clone, Serialize)]
pub struct ListAgentTasksResponse {
    pub agents: Vec<AgentTaskResponse>,
    pub total: usize,
}

/// GET /api/agents
pub async fn list_agents(
    State(state): State<AppState>,
) -> Result<Json<ListAgentTasksResponse>, ApiError> {
    let tasks = state.agent_service.list().await.map_err(ApiError::from)?;

    let agents: Vec<AgentTaskResponse> = tasks.iter().map(AgentTaskResponse::from).collect();
    let total = agents.len();

    Ok(Json(ListAgentTasksResponse { agents, total }))
}

/// GET /api/agents/{agent_id}
pub async fn get_agent(
    State(state): State<AppState>,
    Path(agent_id): Path<Uuid>,
) -> Result<Json<AgentTaskResponse>, ApiError> {
    let task = state
        .agent_service
        .get(agent_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::not_found(format!("Agent task '{}' not found", agent_id)))?;

    Ok(Json(AgentTaskResponse::from(&task)))
}

/// POST /api/agents
pub async fn create_agent(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Json(request): Json<CreateAgentTaskApiRequest>,
) -> Result<(StatusCode, Json<AgentTaskResponse>), ApiError> {
    debug!(user_id = %user.id(), "Creating agent task");

    let create_request = CreateAgentTaskRequest {
        title: request.title,
        description: request.description,
        agent_type: request.agent_type,
        priority: request.priority,
    };

    let task = state
        .agent_service
        .create(create_request, user.id())
        .await
        .map_err(ApiError::from)?;

    Ok((StatusCode::CREATED, Json(AgentTaskResponse::from(&task))))
}

/// PUT /api/agents/{agent_id}
pub async fn update_agent(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(agent_id): Path<Uuid>,
    Json(request): Json<UpdateAgentTaskApiRequest>,
) -> Result<Json<AgentTaskResponse>, ApiError> {
    debug!(user_id = %user.id(), agent_id = %agent_id, "Updating agent task");

    let update_request = UpdateAgentTaskRequest {
        title: request.title,
        description: request.description.map(Some),
        agent_type: request.agent_type,
        priority: request.priority,
        status: request.status,
    };

    let task = state
        .agent_service
        .update(agent_id, update_request)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(AgentTaskResponse::from(&task)))
}

/// DELETE /api/agents/{agent_id}
pub async fn delete_agent(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(agent_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    debug!(user_id = %user.id(), agent_id = %agent_id, "Deleting agent task");

    state
        .agent_service
        .delete(agent_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(serde_json::json!({
        "deleted": true,
        "id": agent_id
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_deserialization() {
        let json = r#"{
            "title": "Review PR",
            "agent_type": "code_review",
            "priority": "high"
        }"#;

        let request: CreateAgentTaskApiRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.title.as_deref(), Some("Review PR"));
        assert_eq!(request.agent_type.as_deref(), Some("code_review"));
        assert_eq!(request.priority, Some(TaskPriority::High));
        assert!(request.description.is_none());
    }

    #[test]
    fn test_create_request_missing_fields() {
        let request: CreateAgentTaskApiRequest = serde_json::from_str("{}").unwrap();
        assert!(request.title.is_none());
        assert!(request.agent_type.is_none());
    }

    #[test]
    fn test_create_request_rejects_bad_priority() {
        let json = r#"{"title": "x", "agent_type": "qa", "priority": "urgent"}"#;
        assert!(serde_json::from_str::<CreateAgentTaskApiRequest>(json).is_err());
    }

    #[test]
    fn test_update_request_is_a_whitelist() {
        // Server-managed fields are not representable in the update struct
        let json = r#"{"status": "completed", "assigned_to": "someone-else"}"#;
        let request: UpdateAgentTaskApiRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.status, Some(TaskStatus::Completed));
        assert!(request.title.is_none());
    }
}
