//! Storage infrastructure - connection pooling and backend selection

mod factory;
mod postgres;

pub use factory::{Repositories, RepositoryFactory, StorageConfig, StorageType};
pub use postgres::{connect_pool, limit_param, PostgresConfig};
