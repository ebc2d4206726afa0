//! User management admin endpoints

use axum::extract::{Path, State};
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::api::auth::UserResponse;
use crate::api::middleware::RequireAdmin;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::infrastructure::user::UpdateUserFlagsRequest;

/// Request to change a user's flags
///
/// The three fields are the complete set an admin may change; any other
/// key in the payload is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserFlagsApiRequest {
    pub is_staff: Option<bool>,
    pub is_superuser: Option<bool>,
    pub is_active: Option<bool>,
}

/// List users response
#[derive(Debug, Serialize)]
pub struct ListUsersResponse {
    pub users: Vec<UserResponse>,
    pub total: usize,
}

/// GET /api/admin/users
pub async fn list_users(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
) -> Result<Json<ListUsersResponse>, ApiError> {
    debug!(user_id = %admin.id(), "Admin listing users");

    let users = state.user_service.list().await.map_err(ApiError::from)?;

    let users: Vec<UserResponse> = users.iter().map(UserResponse::from).collect();
    let total = users.len();

    Ok(Json(ListUsersResponse { users, total }))
}

/// GET /api/admin/users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(user_id): Path<Uuid>,
) -> Result<Json<UserResponse>, ApiError> {
    debug!(user_id = %admin.id(), target = %user_id, "Admin fetching user");

    let user = state
        .user_service
        .get(user_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::not_found(format!("User '{}' not found", user_id)))?;

    Ok(Json(UserResponse::from(&user)))
}

/// PUT /api/admin/users/{user_id}
pub async fn update_user(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(user_id): Path<Uuid>,
    Json(request): Json<UpdateUserFlagsApiRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    debug!(user_id = %admin.id(), target = %user_id, "Admin updating user flags");

    let update_request = UpdateUserFlagsRequest {
        is_staff: request.is_staff,
        is_superuser: request.is_superuser,
        is_active: request.is_active,
    };

    let user = state
        .user_service
        .update_flags(user_id, update_request)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(UserResponse::from(&user)))
}

/// DELETE /api/admin/users/{user_id}
///
/// Refuses to remove the caller's own account.
pub async fn delete_user(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(user_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if user_id == admin.id() {
        return Err(ApiError::bad_request("Cannot delete your own account"));
    }

    debug!(user_id = %admin.id(), target = %user_id, "Admin deleting user");

    state
        .user_service
        .delete(user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(serde_json::json!({
        "deleted": true,
        "id": user_id
    })))
}
