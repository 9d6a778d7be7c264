//! Domain layer - Records, repository traits and errors

pub mod activity;
pub mod comment_activity;
pub mod error;
pub mod metadata;
pub mod notification;
pub mod share;
pub mod timestamp;

pub use activity::{ActivityRecord, ActivityRepository, DEFAULT_ACTIVITY_LIMIT};
pub use comment_activity::{CommentActivityRecord, CommentActivityRepository};
pub use error::DomainError;
pub use metadata::Metadata;
pub use notification::{NotificationRecord, NotificationRepository, DEFAULT_NOTIFICATION_LIMIT};
pub use share::{ShareRecord, ShareRepository, ShareRole, ShareTargetType};
