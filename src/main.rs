//! # GitHub Actions Dispatch CLI
//!
//! A command-line interface for browsing GitHub Actions workflows and
//! dispatching runs with interactively resolved inputs.
//!
//! ## Usage
//!
//! ```bash
//! # Interactive selection and run against the configured repository
//! ghd
//!
//! # List workflows, favorites first
//! ghd list
//!
//! # Run a specific workflow on a specific branch
//! ghd run deploy.yml --branch main
//!
//! # Run with the declared default inputs, no form
//! ghd run deploy.yml --defaults
//!
//! # Toggle a favorite
//! ghd favorite deploy.yml
//!
//! # Configure the default repository
//! ghd repo set octo/widgets
//! ```
//!
//! Authentication uses the `GITHUB_TOKEN` environment variable when set.

use clap::Parser;
use gh_dispatch::{
    Cli, Commands, DispatchError, RepoId,
    adapters::{github::GitHubClient, storage::RocksDbStore, ui::TerminalPrompter},
    cli::commands,
    config
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), DispatchError> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).with_target(false).init();

    let cli = Cli::parse();

    // Repository configuration works without a resolvable repository.
    if let Some(Commands::Repo { command }) = &cli.command {
        return commands::handle_repo_command(command).await;
    }

    let settings = config::load_config()?;
    let repo = resolve_repository(cli.repo.as_deref(), settings.repository.as_deref())?;

    let api = GitHubClient::new(settings.api_url, config::api_token());
    let store = RocksDbStore::open(config::get_favorites_db_path()?)?;
    let prompter = TerminalPrompter::new();

    match cli.command {
        Some(Commands::List) => commands::handle_list(&api, &store, &repo).await,
        Some(Commands::Run { name, branch, defaults }) => {
            commands::handle_run(&api, &prompter, &repo, name.as_deref(), branch.as_deref(), defaults).await
        }
        Some(Commands::Favorite { name }) => {
            commands::handle_favorite(&api, &store, &prompter, &repo, name.as_deref()).await
        }
        Some(Commands::Repo { .. }) => unreachable!("handled above"),
        None => commands::handle_run(&api, &prompter, &repo, None, None, false).await
    }
}

/// Pick the target repository from the flag or the configured default.
fn resolve_repository(flag: Option<&str>, configured: Option<&str>) -> Result<RepoId, DispatchError> {
    flag.or(configured)
        .ok_or_else(|| {
            DispatchError::Configuration(
                "no repository configured; pass --repo or run 'ghd repo set <owner>/<name>'".to_string()
            )
        })?
        .parse()
}
