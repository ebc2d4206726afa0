//! Workflow endpoints

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
use crate::domain::workflow::Workflow;
use crate::infrastructure::services::{CreateWorkflowRequest, UpdateWorkflowRequest};

/// Create the workflow router
pub fn create_workflows_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_workflows))
        .route("/", post(create_workflow))
        .route("/{workflow_id}", get(get_workflow))
        .route("/{workflow_id}", put(update_workflow))
        .route("/{workflow_id}", delete(delete_workflow))
}

/// Request to create a new workflow
#[derive(Debug, Clone, Deserialize)]
pub struct CreateWorkflowApiRequest {
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub definition: Option<serde_json::Value>,
}

/// Request to update a workflow
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateWorkflowApiRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub definition: Option<serde_json::Value>,
    pub is_active: Option<bool>,
}

/// Workflow response
#[derive(Debug, Clone, Serialize)]
pub struct WorkflowResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub definition: serde_json::Value,
    pub is_active: bool,
    pub created_by: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Workflow> for WorkflowResponse {
    fn from(workflow: &Workflow) -> Self {
        Self {
            id: workflow.id().to_string(),
            name: workflow.name().to_string(),
            description: workflow.description().map(String::from),
            definition: workflow.definition().clone(),
            is_active: workflow.is_active(),
            created_by: workflow.created_by().to_string(),
            created_at: workflow.created_at().to_rfc3339(),
            updated_at: workflow.updated_at().to_rfc3339(),
        }
    }
}

/// List workflows response
#[derive(Debug, Clone, Serialize)]
pub struct ListWorkflowsResponse {
    pub workflows: Vec<WorkflowResponse>,
    pub total: usize,
}

/// GET /api/workflows
pub async fn list_workflows(
    State(state): State<AppState>,
) -> Result<Json<ListWorkflowsResponse>, ApiError> {
    let workflows = state.workflow_service.list().await.map_err(ApiError::from)?;

    let workflows: Vec<WorkflowResponse> = workflows.iter().map(WorkflowResponse::from).collect();
    let total = workflows.len();

    Ok(Json(ListWorkflowsResponse { workflows, total }))
}

/// GET /api/workflows/{workflow_id}
pub async fn get_workflow(
    State(state): State<AppState>,
    Path(workflow_id): Path<Uuid>,
) -> Result<Json<WorkflowResponse>, ApiError> {
    let workflow = state
        .workflow_service
        .get(workflow_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::not_found(format!("Workflow '{}' not found", workflow_id)))?;

    Ok(Json(WorkflowResponse::from(&workflow)))
}

/// POST /api/workflows
pub async fn create_workflow(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Json(request): Json<CreateWorkflowApiRequest>,
) -> Result<(StatusCode, Json<WorkflowResponse>), ApiError> {
    debug!(user_id = %user.id(), "Creating workflow");

    let create_request = CreateWorkflowRequest {
        name: request.name,
        description: request.description,
        definition: request.definition,
    };

    let workflow = state
        .workflow_service
        .create(create_request, user.id())
        .await
        .map_err(ApiError::from)?;

    Ok((StatusCode::CREATED, Json(WorkflowResponse::from(&workflow))))
}

/// PUT /api/workflows/{workflow_id}
pub async fn update_workflow(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(workflow_id): Path<Uuid>,
    Json(request): Json<UpdateWorkflowApiRequest>,
) -> Result<Json<WorkflowResponse>, ApiError> {
    debug!(user_id = %user.id(), workflow_id = %workflow_id, "Updating workflow");

    let update_request = UpdateWorkflowRequest {
        name: request.name,
        description: request.description.map(Some),
        definition: request.definition,
        is_active: request.is_active,
    };

    let workflow = state
        .workflow_service
        .update(workflow_id, update_request)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(WorkflowResponse::from(&workflow)))
}

/// DELETE /api/workflows/{workflow_id}
pub async fn delete_workflow(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(workflow_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    debug!(user_id = %user.id(), workflow_id = %workflow_id, "Deleting workflow");

    state
        .workflow_service
        .delete(workflow_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(serde_json::json!({
        "deleted": true,
        "id": workflow_id
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_deserialization() {
        let json = r#"{
            "name": "Nightly build",
            "definition": {"steps": [{"run": "build"}]}
        }"#;

        let request: CreateWorkflowApiRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.name.as_deref(), Some("Nightly build"));
        assert!(request.definition.is_some());
    }

    #[test]
    fn test_update_request_partial() {
        let json = r#"{"is_active": false}"#;

        let request: UpdateWorkflowApiRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.is_active, Some(false));
        assert!(request.name.is_none());
        assert!(request.definition.is_none());
    }
}
