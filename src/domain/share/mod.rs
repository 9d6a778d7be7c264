//! Share domain - role grants on prompts

mod entity;
mod repository;

pub use entity::*;
pub use repository::*;
