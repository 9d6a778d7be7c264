//! Activity log domain - append-only audit trail of prompt actions

mod entity;
mod repository;

pub use entity::*;
pub use repository::*;
