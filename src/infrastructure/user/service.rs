//! User service for registration, authentication and admin management

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::user::{
    validate_email, validate_password, validate_username, Role, User, UserRepository,
};
use crate::domain::DomainError;

use super::password::PasswordHasher;

/// Request for registering a new user
#[derive(Debug, Clone)]
pub struct RegisterUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Admin request to change a user's wire-level flags
///
/// This struct is the whitelist: only the three flags are mutable
/// through the admin API.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserFlagsRequest {
    pub is_staff: Option<bool>,
    pub is_superuser: Option<bool>,
    pub is_active: Option<bool>,
}

/// User service for authentication and management
#[derive(Debug)]
pub struct UserService<R: UserRepository, H: PasswordHasher> {
    repository: Arc<R>,
    hasher: Arc<H>,
}

impl<R: UserRepository, H: PasswordHasher> UserService<R, H> {
    pub fn new(repository: Arc<R>, hasher: Arc<H>) -> Self {
        Self { repository, hasher }
    }

    /// Register a new member-role user
    pub async fn register(&self, request: RegisterUserRequest) -> Result<User, DomainError> {
        self.create_with_role(request, Role::Member).await
    }

    /// Create a user with an explicit role (used for the initial admin seed)
    pub async fn create_with_role(
        &self,
        request: RegisterUserRequest,
        role: Role,
    ) -> Result<User, DomainError> {
        validate_username(&request.username).map_err(|e| DomainError::validation(e.to_string()))?;
        validate_email(&request.email).map_err(|e| DomainError::validation(e.to_string()))?;
        validate_password(&request.password).map_err(|e| DomainError::validation(e.to_string()))?;

        let password_hash = self.hasher.hash(&request.password)?;
        let user = User::new(&request.username, &request.email, password_hash).with_role(role);

        self.repository.create(user).await
    }

    /// Authenticate a user with email and password
    ///
    /// Returns `None` for unknown email, wrong password or a suspended
    /// account; the caller cannot distinguish the three.
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, DomainError> {
        let user = match self.repository.get_by_email(email).await? {
            Some(u) => u,
            None => return Ok(None),
        };

        if !user.is_active() {
            return Ok(None);
        }

        if !self.hasher.verify(password, user.password_hash()) {
            return Ok(None);
        }

        self.repository.record_login(user.id()).await?;

        // Re-fetch to pick up the recorded login time
        self.repository.get(user.id()).await
    }

    /// Get a user by id
    pub async fn get(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        self.repository.get(id).await
    }

    /// List all users, newest first
    pub async fn list(&self) -> Result<Vec<User>, DomainError> {
        self.repository.list().await
    }

    /// Count all users
    pub async fn count(&self) -> Result<u64, DomainError> {
        self.repository.count().await
    }

    /// Apply an admin flag update to a user
    pub async fn update_flags(
        &self,
        id: Uuid,
        request: UpdateUserFlagsRequest,
    ) -> Result<User, DomainError> {
        let mut user = self
            .repository
            .get(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("User '{}' not found", id)))?;

        if let Some(is_staff) = request.is_staff {
            user.set_staff(is_staff);
        }

        if let Some(is_superuser) = request.is_superuser {
            user.set_superuser(is_superuser);
        }

        if let Some(is_active) = request.is_active {
            user.set_active(is_active);
        }

        self.repository.update(&user).await
    }

    /// Delete a user; returns whether a row was removed
    pub async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::user::password::Argon2Hasher;
    use crate::infrastructure::user::repository::InMemoryUserRepository;

    fn create_service() -> UserService<InMemoryUserRepository, Argon2Hasher> {
        let repository = Arc::new(InMemoryUserRepository::new());
        let hasher = Arc::new(Argon2Hasher::new());
        UserService::new(repository, hasher)
    }

    fn make_request(username: &str, email: &str, password: &str) -> RegisterUserRequest {
        RegisterUserRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_register() {
        let service = create_service();

        let user = service
            .register(make_request("testuser", "test@example.com", "secure_password123"))
            .await
            .unwrap();

        assert_eq!(user.username(), "testuser");
        assert_eq!(user.role(), Role::Member);
        assert!(user.is_active());
    }

    #[tokio::test]
    async fn test_register_invalid_username() {
        let service = create_service();

        let result = service
            .register(make_request("ab", "test@example.com", "secure_password123"))
            .await;
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_register_invalid_email() {
        let service = create_service();

        let result = service
            .register(make_request("testuser", "not-an-email", "secure_password123"))
            .await;
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_register_short_password() {
        let service = create_service();

        let result = service
            .register(make_request("testuser", "test@example.com", "short"))
            .await;
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let service = create_service();

        service
            .register(make_request("user1", "same@example.com", "secure_password123"))
            .await
            .unwrap();

        let result = service
            .register(make_request("user2", "same@example.com", "secure_password123"))
            .await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_authenticate_success() {
        let service = create_service();

        service
            .register(make_request("testuser", "test@example.com", "secure_password123"))
            .await
            .unwrap();

        let user = service
            .authenticate("test@example.com", "secure_password123")
            .await
            .unwrap();

        assert!(user.is_some());
        assert!(user.unwrap().last_login_at().is_some());
    }

    #[tokio::test]
    async fn test_authenticate_wrong_password() {
        let service = create_service();

        service
            .register(make_request("testuser", "test@example.com", "secure_password123"))
            .await
            .unwrap();

        let user = service
            .authenticate("test@example.com", "wrong_password")
            .await
            .unwrap();

        assert!(user.is_none());
    }

    #[tokio::test]
    async fn test_authenticate_unknown_email() {
        let service = create_service();

        let user = service
            .authenticate("nobody@example.com", "password123")
            .await
            .unwrap();

        assert!(user.is_none());
    }

    #[tokio::test]
    async fn test_authenticate_suspended_user() {
        let service = create_service();

        let user = service
            .register(make_request("testuser", "test@example.com", "secure_password123"))
            .await
            .unwrap();

        service
            .update_flags(
                user.id(),
                UpdateUserFlagsRequest {
                    is_active: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let result = service
            .authenticate("test@example.com", "secure_password123")
            .await
            .unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_update_flags_promotes() {
        let service = create_service();

        let user = service
            .register(make_request("testuser", "test@example.com", "secure_password123"))
            .await
            .unwrap();

        let updated = service
            .update_flags(
                user.id(),
                UpdateUserFlagsRequest {
                    is_staff: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(updated.role().is_staff());
        assert!(!updated.role().is_superuser());
        assert!(updated.is_active());
    }

    #[tokio::test]
    async fn test_update_flags_unknown_user() {
        let service = create_service();

        let result = service
            .update_flags(Uuid::new_v4(), UpdateUserFlagsRequest::default())
            .await;

        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_create_with_role_superuser() {
        let service = create_service();

        let user = service
            .create_with_role(
                make_request("admin", "admin@example.com", "secure_password123"),
                Role::Superuser,
            )
            .await
            .unwrap();

        assert!(user.has_admin_access());
        assert!(user.role().is_superuser());
    }

    #[tokio::test]
    async fn test_delete() {
        let service = create_service();

        let user = service
            .register(make_request("testuser", "test@example.com", "secure_password123"))
            .await
            .unwrap();

        assert!(service.delete(user.id()).await.unwrap());
        assert!(service.get(user.id()).await.unwrap().is_none());
    }
}
