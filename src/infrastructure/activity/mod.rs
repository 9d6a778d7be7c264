//! Activity log repository implementations

mod in_memory;
mod postgres_repository;

pub use in_memory::InMemoryActivityRepository;
pub use postgres_repository::PostgresActivityRepository;
