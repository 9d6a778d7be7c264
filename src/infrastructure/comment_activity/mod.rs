//! Comment activity repository implementations

mod in_memory;
mod postgres_repository;

pub use in_memory::InMemoryCommentActivityRepository;
pub use postgres_repository::PostgresCommentActivityRepository;
