//! Share command - grant, list and revoke prompt shares

use chrono::{DateTime, Utc};
use clap::Subcommand;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::domain::{ShareRecord, ShareRole, ShareTargetType};
use crate::infrastructure::storage::Repositories;

#[derive(Subcommand, Debug)]
pub enum ShareCommand {
    /// Grant a role on a prompt
    Add {
        #[arg(long)]
        prompt: String,
        #[arg(long)]
        tenant: String,
        /// user, email or tenant
        #[arg(long)]
        target_type: ShareTargetType,
        #[arg(long)]
        target: String,
        /// viewer, editor or approver
        #[arg(long)]
        role: ShareRole,
        #[arg(long)]
        created_by: String,
        /// RFC 3339 timestamp
        #[arg(long)]
        expires_at: Option<DateTime<Utc>>,
    },

    /// List all grants on a prompt within a tenant
    List {
        #[arg(long)]
        prompt: String,
        #[arg(long)]
        tenant: String,
    },

    /// Revoke a grant owned by a tenant
    Remove {
        #[arg(long)]
        id: String,
        #[arg(long)]
        tenant: String,
    },
}

pub async fn execute(command: ShareCommand, repos: &Repositories) -> anyhow::Result<Value> {
    match command {
        ShareCommand::Add {
            prompt,
            tenant,
            target_type,
            target,
            role,
            created_by,
            expires_at,
        } => {
            let record = ShareRecord::new(
                Uuid::new_v4().to_string(),
                prompt,
                tenant,
                target_type,
                target,
                role,
                created_by,
            );
            let record = match expires_at {
                Some(expires_at) => record.with_expires_at(expires_at),
                None => record,
            };

            repos.shares.add_share(record.clone()).await?;
            Ok(json!(record))
        }
        ShareCommand::List { prompt, tenant } => {
            let records = repos.shares.list_shares(&prompt, &tenant).await?;
            Ok(json!(records))
        }
        ShareCommand::Remove { id, tenant } => {
            let removed = repos.shares.remove_share(&id, &tenant).await?;
            Ok(json!({ "removed": removed }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Command};
    use crate::infrastructure::storage::RepositoryFactory;
    use clap::Parser;

    fn parse(args: &[&str]) -> ShareCommand {
        let mut argv = vec!["pmp-prompt-collab", "share"];
        argv.extend_from_slice(args);

        match Cli::try_parse_from(argv).unwrap().command {
            Command::Share(cmd) => cmd,
            _ => panic!("Expected share command"),
        }
    }

    fn add_args(tenant: &str) -> Vec<&str> {
        vec![
            "add", "--prompt", "p1", "--tenant", tenant, "--target-type", "email",
            "--target", "bob@example.com", "--role", "approver", "--created-by", "alice",
        ]
    }

    #[test]
    fn test_add_parses_enums_and_expiry() {
        let mut args = add_args("t1");
        args.extend_from_slice(&["--expires-at", "2030-01-01T00:00:00Z"]);

        match parse(&args) {
            ShareCommand::Add {
                target_type,
                role,
                expires_at,
                ..
            } => {
                assert_eq!(target_type, ShareTargetType::Email);
                assert_eq!(role, ShareRole::Approver);
                assert!(expires_at.is_some());
            }
            _ => panic!("Expected add"),
        }
    }

    #[test]
    fn test_add_rejects_unknown_role() {
        let mut argv = vec!["pmp-prompt-collab", "share"];
        let mut args = add_args("t1");
        args[10] = "owner";
        argv.extend(args);

        assert!(Cli::try_parse_from(argv).is_err());
    }

    #[tokio::test]
    async fn test_add_list_remove() {
        let repos = RepositoryFactory::in_memory();

        let added = execute(parse(&add_args("t1")), &repos).await.unwrap();
        let id = added["id"].as_str().unwrap().to_string();

        let listed = execute(parse(&["list", "--prompt", "p1", "--tenant", "t1"]), &repos)
            .await
            .unwrap();
        assert_eq!(listed.as_array().unwrap().len(), 1);
        assert_eq!(listed[0]["role"], "approver");

        let cross_tenant = execute(parse(&["remove", "--id", id.as_str(), "--tenant", "t2"]), &repos)
            .await
            .unwrap();
        assert_eq!(cross_tenant, json!({"removed": false}));

        let removed = execute(parse(&["remove", "--id", id.as_str(), "--tenant", "t1"]), &repos)
            .await
            .unwrap();
        assert_eq!(removed, json!({"removed": true}));
    }

    #[tokio::test]
    async fn test_add_truncates_sub_microsecond_expiry() {
        let repos = RepositoryFactory::in_memory();
        let mut args = add_args("t1");
        args.extend_from_slice(&["--expires-at", "2030-01-01T00:00:00.123456789Z"]);

        let added = execute(parse(&args), &repos).await.unwrap();
        let listed = repos.shares.list_shares("p1", "t1").await.unwrap();

        assert_eq!(added["expires_at"], "2030-01-01T00:00:00.123456Z");
        assert_eq!(json!(listed[0]), added);
    }
}
