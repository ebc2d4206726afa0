//! Admin authorization middleware
//!
//! Layers the role check on top of bearer authentication: a missing or
//! invalid credential is 401, an authenticated caller without an admin
//! role is 403.

use axum::{extract::FromRequestParts, http::request::Parts};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::user::User;

use super::user_auth::RequireUser;

/// Extractor that requires an authenticated caller with admin access
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub User);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let RequireUser(user) = RequireUser::from_request_parts(parts, state).await?;

        if !user.has_admin_access() {
            return Err(ApiError::forbidden("Admin access required"));
        }

        debug!(user_id = %user.id(), "Admin access granted");
        Ok(RequireAdmin(user))
    }
}
