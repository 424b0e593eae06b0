//! # GitHub Actions Dispatch
//!
//! A library for browsing GitHub Actions workflows and dispatching runs with
//! interactively resolved inputs.
//!
//! This crate provides functionality to:
//! - Decode workflow manifests fetched through the contents API
//! - Extract `workflow_dispatch` inputs in declaration order
//! - Derive form fields, initial values, and validation rules from the inputs
//! - Validate and send run requests through the Actions API
//! - Keep a persisted set of favorite workflows

// Public API modules
pub mod adapters;
pub mod cli;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod favorites;
pub mod form;
pub mod github;
pub mod manifest;
pub mod ports;

// Re-export commonly used types
pub use cli::{Cli, Commands, RepoCommands};
pub use dispatch::DispatchRequest;
pub use error::DispatchError;
pub use form::{FormSession, FormValue, SessionState};
pub use github::{Branch, RepoId, RepositoryData, Workflow};
pub use manifest::{InputType, WorkflowInput};
