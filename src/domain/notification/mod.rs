//! Notification domain - per-recipient inbox with read receipts

mod entity;
mod repository;

pub use entity::*;
pub use repository::*;
