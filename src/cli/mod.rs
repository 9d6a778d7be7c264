//! CLI module for the prompt collaboration data layer
//!
//! Each subcommand maps onto one repository operation and prints its result as
//! JSON on stdout:
//! - `activity`: prompt activity log
//! - `comment`: comment activity log
//! - `notification`: recipient inbox and read receipts
//! - `share`: prompt share registry

pub mod activity;
pub mod comment;
pub mod notification;
pub mod share;

use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing::info;

use crate::config::AppConfig;
use crate::infrastructure::logging;
use crate::infrastructure::storage::{Repositories, RepositoryFactory, StorageConfig};

/// PMP Prompt Collab - activity, notification and sharing records for prompts
#[derive(Parser)]
#[command(name = "pmp-prompt-collab")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Prompt activity log
    #[command(subcommand)]
    Activity(activity::ActivityCommand),

    /// Comment activity log
    #[command(subcommand)]
    Comment(comment::CommentCommand),

    /// Recipient notifications
    #[command(subcommand)]
    Notification(notification::NotificationCommand),

    /// Prompt shares
    #[command(subcommand)]
    Share(share::ShareCommand),
}

/// Loads configuration, connects storage and runs one command
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    logging::init_logging(&config.logging)?;

    let storage = StorageConfig::from_settings(&config.storage)?;
    info!(backend = ?storage.storage_type(), "Opening storage");
    let repos = RepositoryFactory::create(&storage).await?;

    let output = execute(cli.command, &repos).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

/// Runs a command against the given repositories and returns its JSON output
pub async fn execute(command: Command, repos: &Repositories) -> anyhow::Result<Value> {
    match command {
        Command::Activity(cmd) => activity::execute(cmd, repos).await,
        Command::Comment(cmd) => comment::execute(cmd, repos).await,
        Command::Notification(cmd) => notification::execute(cmd, repos).await,
        Command::Share(cmd) => share::execute(cmd, repos).await,
    }
}
