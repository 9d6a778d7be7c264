//! Activity command - append to and read the prompt activity log

use clap::Subcommand;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::domain::metadata::{parse_metadata_arg, Metadata};
use crate::domain::{ActivityRecord, DEFAULT_ACTIVITY_LIMIT};
use crate::infrastructure::storage::Repositories;

#[derive(Subcommand, Debug)]
pub enum ActivityCommand {
    /// Record an action taken on a prompt
    Log {
        #[arg(long)]
        prompt: String,
        #[arg(long)]
        tenant: String,
        #[arg(long)]
        action: String,
        #[arg(long)]
        actor: Option<String>,
        /// JSON object
        #[arg(long, value_parser = parse_metadata_arg)]
        metadata: Option<Metadata>,
    },

    /// List recent activity for a prompt, newest first
    List {
        #[arg(long)]
        prompt: String,
        #[arg(long)]
        tenant: String,
        #[arg(long, default_value_t = DEFAULT_ACTIVITY_LIMIT)]
        limit: usize,
    },
}

pub async fn execute(command: ActivityCommand, repos: &Repositories) -> anyhow::Result<Value> {
    match command {
        ActivityCommand::Log {
            prompt,
            tenant,
            action,
            actor,
            metadata,
        } => {
            let mut record = ActivityRecord::new(Uuid::new_v4().to_string(), prompt, tenant, action);
            record.actor = actor;
            record.metadata = metadata;

            repos.activity.log_activity(record.clone()).await?;
            Ok(json!(record))
        }
        ActivityCommand::List {
            prompt,
            tenant,
            limit,
        } => {
            let records = repos.activity.list_activity(&prompt, &tenant, limit).await?;
            Ok(json!(records))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Command};
    use crate::infrastructure::storage::RepositoryFactory;
    use clap::Parser;

    fn parse(args: &[&str]) -> ActivityCommand {
        match Cli::try_parse_from(args.iter().copied()).unwrap().command {
            Command::Activity(cmd) => cmd,
            _ => panic!("Expected activity command"),
        }
    }

    #[test]
    fn test_list_uses_default_limit() {
        let cmd = parse(&["pmp-prompt-collab", "activity", "list", "--prompt", "p1", "--tenant", "t1"]);

        match cmd {
            ActivityCommand::List { limit, .. } => assert_eq!(limit, DEFAULT_ACTIVITY_LIMIT),
            _ => panic!("Expected list"),
        }
    }

    #[test]
    fn test_log_rejects_non_object_metadata() {
        let result = Cli::try_parse_from([
            "pmp-prompt-collab", "activity", "log", "--prompt", "p1", "--tenant", "t1",
            "--action", "prompt.updated", "--metadata", "[1]",
        ]);

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_log_then_list() {
        let repos = RepositoryFactory::in_memory();

        let logged = execute(
            parse(&[
                "pmp-prompt-collab", "activity", "log", "--prompt", "p1", "--tenant", "t1",
                "--action", "prompt.updated", "--actor", "alice", "--metadata", r#"{"version":3}"#,
            ]),
            &repos,
        )
        .await
        .unwrap();
        assert_eq!(logged["actor"], "alice");

        let listed = execute(
            parse(&["pmp-prompt-collab", "activity", "list", "--prompt", "p1", "--tenant", "t1"]),
            &repos,
        )
        .await
        .unwrap();

        assert_eq!(listed.as_array().unwrap().len(), 1);
        assert_eq!(listed[0]["id"], logged["id"]);
        assert_eq!(listed[0]["metadata"]["version"], 3);
    }
}
