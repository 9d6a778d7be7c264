//! Infrastructure layer - Storage backends and process setup

pub mod activity;
pub mod comment_activity;
pub mod logging;
pub mod notification;
pub mod share;
pub mod storage;
