//! Comment activity domain

mod entity;
mod repository;

pub use entity::*;
pub use repository::*;
