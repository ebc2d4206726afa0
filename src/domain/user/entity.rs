//! User entity and role model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Access level of a user account
///
/// Roles form a ladder: `Member < Staff < Superuser`. The wire-level
/// `is_staff` / `is_superuser` flags are derived from the role, never
/// stored separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Member,
    Staff,
    Superuser,
}

impl Role {
    /// Derived `is_staff` flag: staff access or above
    pub fn is_staff(&self) -> bool {
        *self >= Role::Staff
    }

    /// Derived `is_superuser` flag
    pub fn is_superuser(&self) -> bool {
        *self == Role::Superuser
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Member => "member",
            Role::Staff => "staff",
            Role::Superuser => "superuser",
        }
    }
}

/// Status of a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    /// Account is active and can log in
    #[default]
    Active,
    /// Account is suspended; authentication and bearer access are refused
    Suspended,
}

impl UserStatus {
    pub fn can_login(&self) -> bool {
        matches!(self, Self::Active)
    }
}

/// User entity for authentication and admin management
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    id: Uuid,
    username: String,
    email: String,
    /// Argon2 password hash - never exposed in serialization
    #[serde(skip_serializing)]
    password_hash: String,
    role: Role,
    status: UserStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_login_at: Option<DateTime<Utc>>,
}

impl User {
    /// Create a new active member-role user with a fresh id
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            role: Role::Member,
            status: UserStatus::Active,
            created_at: now,
            updated_at: now,
            last_login_at: None,
        }
    }

    /// Set the role at construction time
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// Reconstruct a user from stored fields
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_parts(
        id: Uuid,
        username: String,
        email: String,
        password_hash: String,
        role: Role,
        status: UserStatus,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        last_login_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            username,
            email,
            password_hash,
            role,
            status,
            created_at,
            updated_at,
            last_login_at,
        }
    }

    // Getters

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn status(&self) -> UserStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn last_login_at(&self) -> Option<DateTime<Utc>> {
        self.last_login_at
    }

    /// Check if the account is active and can log in
    pub fn is_active(&self) -> bool {
        self.status.can_login()
    }

    /// The authorization predicate for admin routes
    pub fn has_admin_access(&self) -> bool {
        self.role.is_staff()
    }

    // Mutators

    /// Apply the wire-level `is_staff` flag to the role ladder
    ///
    /// Granting promotes a member to staff; revoking demotes a staff
    /// member. A superuser is unaffected by `is_staff` writes.
    pub fn set_staff(&mut self, is_staff: bool) {
        match (is_staff, self.role) {
            (true, Role::Member) => self.role = Role::Staff,
            (false, Role::Staff) => self.role = Role::Member,
            _ => return,
        }
        self.touch();
    }

    /// Apply the wire-level `is_superuser` flag to the role ladder
    ///
    /// Revoking falls back to staff, not member.
    pub fn set_superuser(&mut self, is_superuser: bool) {
        match (is_superuser, self.role) {
            (true, Role::Member) | (true, Role::Staff) => self.role = Role::Superuser,
            (false, Role::Superuser) => self.role = Role::Staff,
            _ => return,
        }
        self.touch();
    }

    /// Apply the wire-level `is_active` flag to the account status
    pub fn set_active(&mut self, is_active: bool) {
        let status = if is_active {
            UserStatus::Active
        } else {
            UserStatus::Suspended
        };

        if self.status != status {
            self.status = status;
            self.touch();
        }
    }

    /// Record a login
    pub fn record_login(&mut self) {
        self.last_login_at = Some(Utc::now());
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
