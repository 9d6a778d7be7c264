//! PMP Prompt Collab
//!
//! Data layer for collaboration around prompts:
//! - Prompt and comment activity logs (append-only)
//! - Per-recipient notifications with read receipts
//! - Role-based prompt shares scoped by tenant
//!
//! Every repository has an in-memory implementation for development and tests
//! and a PostgreSQL implementation sharing one connection pool.

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::DomainError;
pub use infrastructure::storage::{Repositories, RepositoryFactory, StorageConfig};
