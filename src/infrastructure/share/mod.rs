//! Share registry repository implementations

mod in_memory;
mod postgres_repository;

pub use in_memory::InMemoryShareRepository;
pub use postgres_repository::PostgresShareRepository;
