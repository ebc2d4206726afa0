//! Admin API endpoints - system stats and user management

pub mod stats;
pub mod users;

use axum::{
    routing::{delete, get, put},
    Router,
};

use super::state::AppState;

/// Create the admin router
///
/// Every route behind this router requires an authenticated caller with
/// admin access.
pub fn create_admin_router() -> Router<AppState> {
    Router::new()
        .route("/stats", get(stats::get_stats))
        .route("/users", get(users::list_users))
        .route("/users/{user_id}", get(users::get_user))
        .route("/users/{user_id}", put(users::update_user))
        .route("/users/{user_id}", delete(users::delete_user))
}
