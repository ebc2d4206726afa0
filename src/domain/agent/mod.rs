//! Agent task domain - entity and repository trait

mod entity;
mod repository;

pub use entity::{AgentTask, TaskPriority, TaskStatus};
pub use repository::AgentTaskRepository;
