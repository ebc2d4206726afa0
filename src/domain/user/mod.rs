//! User domain - entity, roles, repository trait and validation

mod entity;
mod repository;
mod validation;

pub use entity::{Role, User, UserStatus};
pub use repository::UserRepository;
pub use validation::{validate_email, validate_password, validate_username, UserValidationError};
