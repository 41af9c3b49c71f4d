mod api;
mod cmd;
mod config;
mod context;
mod domain;
mod error;
mod infra;
mod services;
mod workflow;

use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{AppConfig, ConfigArgs};
use crate::context::AppContext;
use crate::error::AppResult;
use crate::infra::jira::JiraClient;

#[derive(Parser)]
#[command(
    name = "opal-jira",
    author,
    version,
    about = "Jira ticket creation tool for the Opal automation platform"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    #[command(flatten)]
    config: ConfigArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the discovery, tool and health endpoints (default).
    Serve,
    /// Check Jira connectivity and the configured assignee, then exit.
    Check,
    /// Show the effective configuration (secrets masked).
    Config,
}

#[tokio::main]
async fn main() {
    init_tracing();

    match run().await {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(error) => {
            eprintln!("Error: {error}");
            std::process::exit(1);
        }
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "opal_jira=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run() -> AppResult<bool> {
    let cli = Cli::parse();
    let config = AppConfig::from_args(cli.config)?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Config => {
            cmd::config::run(&config);
            Ok(true)
        }
        Commands::Check => {
            let ctx = build_context(config)?;
            cmd::check::run(&ctx).await
        }
        Commands::Serve => {
            for (field, value) in cmd::config::describe(&config) {
                info!("{field}: {value}");
            }
            if config.bearer_token.is_none() {
                warn!("OPAL_BEARER_TOKEN not configured; tool calls are accepted without authentication");
            }
            let ctx = build_context(config)?;
            api::run(ctx).await?;
            Ok(true)
        }
    }
}

fn build_context(config: AppConfig) -> AppResult<AppContext> {
    let issue_tracker = Arc::new(JiraClient::new(&config.jira)?);
    Ok(AppContext::new(config, issue_tracker))
}
