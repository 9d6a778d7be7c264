//! Comment command - append to the comment activity log

use clap::Subcommand;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::domain::metadata::{parse_metadata_arg, Metadata};
use crate::domain::CommentActivityRecord;
use crate::infrastructure::storage::Repositories;

#[derive(Subcommand, Debug)]
pub enum CommentCommand {
    /// Record an action taken on a comment
    Log {
        #[arg(long)]
        comment: String,
        #[arg(long)]
        prompt: String,
        #[arg(long)]
        tenant: String,
        #[arg(long)]
        action: String,
        #[arg(long)]
        actor: String,
        /// JSON object
        #[arg(long, value_parser = parse_metadata_arg)]
        metadata: Option<Metadata>,
    },
}

pub async fn execute(command: CommentCommand, repos: &Repositories) -> anyhow::Result<Value> {
    match command {
        CommentCommand::Log {
            comment,
            prompt,
            tenant,
            action,
            actor,
            metadata,
        } => {
            let mut record = CommentActivityRecord::new(
                Uuid::new_v4().to_string(),
                comment,
                prompt,
                tenant,
                action,
                actor,
            );
            record.metadata = metadata;

            repos.comment_activity.log_comment_activity(record.clone()).await?;
            Ok(json!(record))
        }
    }
}
