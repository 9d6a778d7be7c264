//! Notification repository implementations

mod in_memory;
mod postgres_repository;

pub use in_memory::InMemoryNotificationRepository;
pub use postgres_repository::PostgresNotificationRepository;
