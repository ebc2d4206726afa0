//! Authentication API endpoints
//!
//! Registration, login and current-user lookup for JWT-based
//! authentication.

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Router,
};
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::api::middleware::RequireUser;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::user::User;
use crate::infrastructure::user::RegisterUserRequest;

/// Create the authentication router
pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/me", get(get_current_user))
}

/// Registration request
#[derive(Debug, Deserialize)]
pub struct RegisterApiRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Login request
#[derive(Debug, Deserialize)]
pub struct LoginApiRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Token response returned by register and login
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
    pub user: UserResponse,
    pub expires_at: String,
}

/// User response (safe to expose)
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub is_active: bool,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login_at: Option<String>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().to_string(),
            username: user.username().to_string(),
            email: user.email().to_string(),
            is_staff: user.role().is_staff(),
            is_superuser: user.role().is_superuser(),
            is_active: user.is_active(),
            created_at: user.created_at().to_rfc3339(),
            last_login_at: user.last_login_at().map(|t| t.to_rfc3339()),
        }
    }
}

/// Register a new user
///
/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterApiRequest>,
) -> Result<(StatusCode, Json<TokenResponse>), ApiError> {
    let username = required_field(request.username, "username")?;
    let email = required_field(request.email, "email")?;
    let password = required_field(request.password, "password")?;

    let user = state
        .user_service
        .register(RegisterUserRequest {
            username,
            email,
            password,
        })
        .await
        .map_err(ApiError::from)?;

    let response = token_response(&state, &user)?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Login with email and password
///
/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginApiRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let email = required_field(request.email, "email")?;
    let password = required_field(request.password, "password")?;

    let user = state
        .user_service
        .authenticate(&email, &password)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::unauthorized("Invalid email or password"))?;

    Ok(Json(token_response(&state, &user)?))
}

/// Get the current authenticated user
///
/// GET /api/auth/me
pub async fn get_current_user(
    RequireUser(user): RequireUser,
) -> Result<Json<MeResponse>, ApiError> {
    Ok(Json(MeResponse {
        user: UserResponse::from(&user),
    }))
}

/// Current-user response envelope
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user: UserResponse,
}

fn token_response(state: &AppState, user: &User) -> Result<TokenResponse, ApiError> {
    let token = state.jwt_service.generate(user).map_err(ApiError::from)?;
    let expires_at = Utc::now() + Duration::hours(state.jwt_service.expiration_hours() as i64);

    Ok(TokenResponse {
        token,
        user: UserResponse::from(user),
        expires_at: expires_at.to_rfc3339(),
    })
}

fn required_field(value: Option<String>, name: &str) -> Result<String, ApiError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ApiError::bad_request(format!("{} is required", name))),
    }
}
