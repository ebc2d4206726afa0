//! System statistics endpoint

use axum::extract::State;
use serde::Serialize;
use tracing::debug;

use crate::api::middleware::RequireAdmin;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};

/// Row counts across the four tables
#[derive(Debug, Clone, Serialize)]
pub struct StatsCounts {
    pub users: u64,
    pub agents: u64,
    pub projects: u64,
    pub workflows: u64,
}

/// Stats response envelope
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub stats: StatsCounts,
}

/// GET /api/admin/stats
pub async fn get_stats(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
) -> Result<Json<StatsResponse>, ApiError> {
    debug!(user_id = %admin.id(), "Admin fetching system stats");

    // The four counts are independent reads; fetch them concurrently
    let (users, agents, projects, workflows) = tokio::join!(
        state.user_service.count(),
        state.agent_service.count(),
        state.project_service.count(),
        state.workflow_service.count(),
    );

    Ok(Json(StatsResponse {
        stats: StatsCounts {
            users: users.map_err(ApiError::from)?,
            agents: agents.map_err(ApiError::from)?,
            projects: projects.map_err(ApiError::from)?,
            workflows: workflows.map_err(ApiError::from)?,
        },
    }))
}
