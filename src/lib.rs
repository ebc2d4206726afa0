//! OpsHub API
//!
//! A REST gateway over PostgreSQL for agent tasks, projects, workflows
//! and admin user management. All persistent state lives in the external
//! database; this layer validates input, stamps ownership and shapes
//! responses.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use rand::Rng;
use tracing::{info, warn};

use api::state::AppState;
use domain::user::Role;
use infrastructure::agent::{InMemoryAgentTaskRepository, PostgresAgentTaskRepository};
use infrastructure::auth::{JwtConfig, JwtGenerator, JwtService};
use infrastructure::project::{InMemoryProjectRepository, PostgresProjectRepository};
use infrastructure::services::{AgentTaskService, ProjectService, WorkflowService};
use infrastructure::user::{
    Argon2Hasher, InMemoryUserRepository, PostgresUserRepository, RegisterUserRequest, UserService,
};
use infrastructure::workflow::{InMemoryWorkflowRepository, PostgresWorkflowRepository};

/// Create the application state with all services initialized
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let jwt_service = create_jwt_service(config);
    let hasher = Arc::new(Argon2Hasher::new());

    let use_postgres = config.storage.backend.eq_ignore_ascii_case("postgres");

    if use_postgres {
        info!("Using PostgreSQL storage backend");

        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL environment variable is required"))?;

        info!("Connecting to PostgreSQL...");
        let pool = sqlx::PgPool::connect(&database_url)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to connect to PostgreSQL: {}", e))?;
        info!("PostgreSQL connection established");

        let user_service = Arc::new(UserService::new(
            Arc::new(PostgresUserRepository::new(pool.clone())),
            hasher,
        ));

        create_initial_admin_user(user_service.as_ref()).await?;

        Ok(AppState::new(
            Arc::new(AgentTaskService::new(Arc::new(
                PostgresAgentTaskRepository::new(pool.clone()),
            ))),
            Arc::new(ProjectService::new(Arc::new(
                PostgresProjectRepository::new(pool.clone()),
            ))),
            Arc::new(WorkflowService::new(Arc::new(
                PostgresWorkflowRepository::new(pool),
            ))),
            user_service,
            jwt_service,
        ))
    } else {
        info!("Using in-memory storage backend");

        let user_service = Arc::new(UserService::new(
            Arc::new(InMemoryUserRepository::new()),
            hasher,
        ));

        create_initial_admin_user(user_service.as_ref()).await?;

        Ok(AppState::new(
            Arc::new(AgentTaskService::new(Arc::new(
                InMemoryAgentTaskRepository::new(),
            ))),
            Arc::new(ProjectService::new(Arc::new(
                InMemoryProjectRepository::new(),
            ))),
            Arc::new(WorkflowService::new(Arc::new(
                InMemoryWorkflowRepository::new(),
            ))),
            user_service,
            jwt_service,
        ))
    }
}

/// Create the JWT service from the configured secret, the JWT_SECRET
/// environment variable, or a random per-process secret
fn create_jwt_service(config: &AppConfig) -> Arc<dyn JwtGenerator> {
    let expiration = u64::from(config.auth.jwt_expiration_hours);

    let secret = config
        .auth
        .jwt_secret
        .clone()
        .or_else(|| std::env::var("JWT_SECRET").ok())
        .unwrap_or_else(|| {
            warn!(
                "No JWT secret configured. Generating a random secret; \
                 sessions will NOT persist across restarts. \
                 Set JWT_SECRET for persistent sessions."
            );
            generate_random_secret()
        });

    Arc::new(JwtService::new(JwtConfig::new(secret, expiration)))
}

/// Generate a random alphanumeric secret
fn generate_random_secret() -> String {
    use rand::distributions::Alphanumeric;

    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(64)
        .map(char::from)
        .collect()
}

/// Generate a random password for the initial admin user
fn generate_random_password() -> String {
    use rand::distributions::Alphanumeric;

    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(16)
        .map(char::from)
        .collect()
}

/// Create an initial superuser if no users exist
async fn create_initial_admin_user<R, H>(user_service: &UserService<R, H>) -> anyhow::Result<()>
where
    R: domain::user::UserRepository,
    H: infrastructure::user::PasswordHasher,
{
    if user_service.count().await? > 0 {
        return Ok(());
    }

    // Use ADMIN_DEFAULT_PASSWORD if set, otherwise generate one
    let (password, is_default) = match std::env::var("ADMIN_DEFAULT_PASSWORD") {
        Ok(p) if !p.is_empty() => (p, true),
        _ => (generate_random_password(), false),
    };

    let email =
        std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@example.com".to_string());

    let request = RegisterUserRequest {
        username: "admin".to_string(),
        email: email.clone(),
        password: password.clone(),
    };

    user_service
        .create_with_role(request, Role::Superuser)
        .await?;

    info!("===========================================");
    info!("Initial admin user created!");
    info!("Email: {}", email);

    if is_default {
        info!("Password: (set via ADMIN_DEFAULT_PASSWORD)");
    } else {
        info!("Password: {}", password);
    }

    info!("Please change this password after first login.");
    info!("===========================================");

    Ok(())
}
