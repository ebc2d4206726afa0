//! Project endpoints

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
use crate::domain::project::{Project, ProjectStatus};
use crate::infrastructure::services::{CreateProjectRequest, UpdateProjectRequest};

/// Create the project router
pub fn create_projects_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_projects))
        .route("/", post(create_project))
        .route("/{project_id}", get(get_project))
        .route("/{project_id}", put(update_project))
        .route("/{project_id}", delete(delete_project))
}

/// Request to create a new project
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProjectApiRequest {
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<ProjectStatus>,
    #[serde(default)]
    pub requirements: Option<String>,
}

/// Request to update a project
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProjectApiRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<ProjectStatus>,
    pub requirements: Option<String>,
}

/// Project response
#[derive(Debug, Clone, Serialize)]
pub struct ProjectResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: ProjectStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<String>,
    pub owner_id: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Project> for ProjectResponse {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id().to_string(),
            name: project.name().to_string(),
            description: project.description().map(String::from),
            status: project.status(),
            requirements: project.requirements().map(String::from),
            owner_id: project.owner_id().to_string(),
            created_at: project.created_at().to_rfc3339(),
            updated_at: project.updated_at().to_rfc3339(),
        }
    }
}

/// List projects response
#[derive(Debug, Clone, Serialize)]
pub struct ListProjectsResponse {
    pub projects: Vec<ProjectResponse>,
    pub total: usize,
}

/// GET /api/projects
pub async fn list_projects(
    State(state): State<AppState>,
) -> Result<Json<ListProjectsResponse>, ApiError> {
    let projects = state.project_service.list().await.map_err(ApiError::from)?;

    let projects: Vec<ProjectResponse> = projects.iter().map(ProjectResponse::from).collect();
    let total = projects.len();

    Ok(Json(ListProjectsResponse { projects, total }))
}

/// GET /api/projects/{project_id}
pub async fn get_project(
    State(state): State<AppState>,
    Path(project_id): Path<Uuid>,
) -> Result<Json<ProjectResponse>, ApiError> {
    let project = state
        .project_service
        .get(project_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::not_found(format!("Project '{}' not found", project_id)))?;

    Ok(Json(ProjectResponse::from(&project)))
}

/// POST /api/projects
pub async fn create_project(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Json(request): Json<CreateProjectApiRequest>,
) -> Result<(StatusCode, Json<ProjectResponse>), ApiError> {
    debug!(user_id = %user.id(), "Creating project");

    let create_request = CreateProjectRequest {
        name: request.name,
        description: request.description,
        status: request.status,
        requirements: request.requirements,
    };

    let project = state
        .project_service
        .create(create_request, user.id())
        .await
        .map_err(ApiError::from)?;

    Ok((StatusCode::CREATED, Json(ProjectResponse::from(&project))))
}

/// PUT /api/projects/{project_id}
pub async fn update_project(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(project_id): Path<Uuid>,
    Json(request): Json<UpdateProjectApiRequest>,
) -> Result<Json<ProjectResponse>, ApiError> {
    debug!(user_id = %user.id(), project_id = %project_id, "Updating project");

    let update_request = UpdateProjectRequest {
        name: request.name,
        description: request.description.map(Some),
        status: request.status,
        requirements: request.requirements.map(Some),
    };

    let project = state
        .project_service
        .update(project_id, update_request)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(ProjectResponse::from(&project)))
}

/// DELETE /api/projects/{project_id}
pub async fn delete_project(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(project_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    debug!(user_id = %user.id(), project_id = %project_id, "Deleting project");

    state
        .project_service
        .delete(project_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(serde_json::json!({
        "deleted": true,
        "id": project_id
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_deserialization() {
        let json = r#"{"name": "Demo", "status": "active"}"#;

        let request: CreateProjectApiRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.name.as_deref(), Some("Demo"));
        assert_eq!(request.status, Some(ProjectStatus::Active));
    }

    #[test]
    fn test_create_request_rejects_bad_status() {
        let json = r#"{"name": "Demo", "status": "archived"}"#;
        assert!(serde_json::from_str::<CreateProjectApiRequest>(json).is_err());
    }

    #[test]
    fn test_update_request_partial() {
        let json = r#"{"status": "completed"}"#;

        let request: UpdateProjectApiRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.status, Some(ProjectStatus::Completed));
        assert!(request.name.is_none());
        assert!(request.requirements.is_none());
    }
}
