//! API layer - HTTP endpoints and middleware

pub mod admin;
pub mod agents;
pub mod auth;
pub mod docs;
pub mod health;
pub mod middleware;
pub mod projects;
pub mod router;
pub mod state;
pub mod types;
pub mod workflows;

pub use middleware::{RequireAdmin, RequireUser};
pub use router::create_router_with_state;
pub use state::AppState;
