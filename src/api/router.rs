//! Router assembly - routes, CORS, tracing and fallback handlers

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::state::AppState;
use super::types::ApiError;
use super::{admin, agents, auth, docs, health, projects, workflows};

/// Create the full router with application state
pub fn create_router_with_state(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        // Informational payloads
        .route("/", get(docs::api_root))
        .route("/api", get(docs::api_index))
        .route("/api/docs", get(docs::api_docs))
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        // Authentication endpoints
        .nest("/api/auth", auth::create_auth_router())
        // Resource routers
        .nest("/api/agents", agents::create_agents_router())
        .nest("/api/projects", projects::create_projects_router())
        .nest("/api/workflows", workflows::create_workflows_router())
        // Admin API
        .nest("/api/admin", admin::create_admin_router())
        // Unmatched routes
        .fallback(not_found)
        // Add state and middleware
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Fallback handler for unmatched routes
async fn not_found() -> ApiError {
    ApiError::not_found("Endpoint not found")
}
