//! Agent task storage backends

mod postgres_repository;
mod repository;

pub use postgres_repository::PostgresAgentTaskRepository;
pub use repository::InMemoryAgentTaskRepository;
