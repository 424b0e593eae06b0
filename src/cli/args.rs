//! CLI argument parsing

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Repository in owner/name form (overrides the configured default)
    #[arg(short, long, global = true, value_name = "OWNER/NAME")]
    pub repo: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>
}

#[derive(Subcommand)]
pub enum Commands {
    /// List workflows, favorites first
    List,
    /// Run a workflow (shows a selection menu if no name is given)
    Run {
        /// Workflow name or manifest file name
        name: Option<String>,

        /// Branch to run against (skips the branch selection menu)
        #[arg(short, long)]
        branch: Option<String>,

        /// Skip the input form and run with declared defaults
        #[arg(long)]
        defaults: bool
    },
    /// Toggle a workflow's favorite status
    Favorite {
        /// Workflow name or manifest file name
        name: Option<String>
    },
    /// Repository configuration commands
    Repo {
        #[command(subcommand)]
        command: RepoCommands
    }
}

#[derive(Subcommand)]
pub enum RepoCommands {
    /// Set the default repository
    Set {
        /// Repository in owner/name form
        repository: String
    },
    /// Show the configured default repository
    Current
}
