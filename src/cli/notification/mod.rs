//! Notification command - create, list and acknowledge notifications

use clap::Subcommand;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::domain::metadata::{parse_metadata_arg, Metadata};
use crate::domain::{NotificationRecord, DEFAULT_NOTIFICATION_LIMIT};
use crate::infrastructure::storage::Repositories;

#[derive(Subcommand, Debug)]
pub enum NotificationCommand {
    /// Deliver a notification to a recipient
    Create {
        #[arg(long)]
        recipient: String,
        #[arg(long = "type")]
        notification_type: String,
        #[arg(long)]
        message: String,
        /// Omit for a global notification
        #[arg(long)]
        tenant: Option<String>,
        /// JSON object
        #[arg(long, value_parser = parse_metadata_arg)]
        metadata: Option<Metadata>,
    },

    /// List a recipient's notifications, newest first
    List {
        #[arg(long)]
        recipient: String,
        #[arg(long, default_value_t = DEFAULT_NOTIFICATION_LIMIT)]
        limit: usize,
    },

    /// Mark a notification read; prints null when it does not belong to the recipient
    Read {
        #[arg(long)]
        id: String,
        #[arg(long)]
        recipient: String,
    },
}

pub async fn execute(
    command: NotificationCommand,
    repos: &Repositories,
) -> anyhow::Result<Value> {
    match command {
        NotificationCommand::Create {
            recipient,
            notification_type,
            message,
            tenant,
            metadata,
        } => {
            let mut record = NotificationRecord::new(
                Uuid::new_v4().to_string(),
                recipient,
                notification_type,
                message,
            );
            record.tenant_id = tenant;
            record.metadata = metadata;

            repos.notifications.create_notification(record.clone()).await?;
            Ok(json!(record))
        }
        NotificationCommand::List { recipient, limit } => {
            let records = repos.notifications.list_notifications(&recipient, limit).await?;
            Ok(json!(records))
        }
        NotificationCommand::Read { id, recipient } => {
            let record = repos
                .notifications
                .mark_notification_read(&id, &recipient)
                .await?;
            Ok(json!(record))
        }
    }
}
