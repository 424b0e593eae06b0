//! Actions API port - interface to the remote execution backend

use async_trait::async_trait;

use crate::{
    dispatch::DispatchRequest,
    error::DispatchError,
    github::{RepoId, RepositoryData, Workflow}
};

/// Port for the remote workflow backend.
#[async_trait]
pub trait ActionsApi: Send + Sync {
    /// List the workflows defined in a repository
    async fn list_workflows(&self, repo: &RepoId) -> Result<Vec<Workflow>, DispatchError>;

    /// Fetch the default branch and branch list for a repository
    async fn repository_data(&self, repo: &RepoId) -> Result<RepositoryData, DispatchError>;

    /// Fetch a file's base64-encoded content.
    ///
    /// Any non-content response (a directory listing, a payload without a
    /// `content` field) yields an empty string, which downstream maps to an
    /// empty manifest.
    async fn file_content(&self, repo: &RepoId, path: &str) -> Result<String, DispatchError>;

    /// Queue a workflow run. One call, one remote state change; re-sending
    /// the same request queues a second run.
    async fn dispatch(&self, request: &DispatchRequest) -> Result<(), DispatchError>;
}
