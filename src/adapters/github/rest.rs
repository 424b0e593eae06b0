//! Reqwest implementation of the Actions API port

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::{
    dispatch::DispatchRequest,
    error::DispatchError,
    github::{Branch, RepoId, RepositoryData, Workflow},
    ports::api::ActionsApi
};

const API_VERSION: &str = "2022-11-28";
const USER_AGENT: &str = concat!("gh-dispatch/", env!("CARGO_PKG_VERSION"));

/// GitHub REST v3 client.
pub struct GitHubClient {
    client:   reqwest::Client,
    base_url: String,
    token:    Option<String>
}

#[derive(Deserialize)]
struct WorkflowsPayload {
    workflows: Vec<Workflow>
}

#[derive(Deserialize)]
struct RepositoryPayload {
    default_branch: String
}

#[derive(Deserialize)]
struct ApiErrorPayload {
    message: String
}

impl GitHubClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            client:   reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token
        }
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let mut builder = self
            .client
            .request(method, format!("{}{}", self.base_url, path))
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", API_VERSION)
            .header("User-Agent", USER_AGENT);

        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }

        builder
    }

    /// Execute a GET and deserialize a successful JSON response.
    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, DispatchError> {
        debug!(path, "GET");

        let response = self
            .request(reqwest::Method::GET, path)
            .send()
            .await
            .map_err(|e| DispatchError::ContentFetch(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(DispatchError::NotFound(path.to_string()));
        }
        if !status.is_success() {
            return Err(DispatchError::ContentFetch(Self::error_message(response).await));
        }

        response.json::<T>().await.map_err(|e| DispatchError::ContentFetch(e.to_string()))
    }

    /// Pull the API error message out of a failed response, falling back to
    /// the status line.
    async fn error_message(response: reqwest::Response) -> String {
        let status = response.status();
        match response.json::<ApiErrorPayload>().await {
            Ok(payload) => payload.message,
            Err(_) => status.to_string()
        }
    }
}

#[async_trait]
impl ActionsApi for GitHubClient {
    async fn list_workflows(&self, repo: &RepoId) -> Result<Vec<Workflow>, DispatchError> {
        let path = format!("/repos/{}/{}/actions/workflows?per_page=100", repo.owner, repo.name);
        let payload: WorkflowsPayload = self.get_json(&path).await?;
        Ok(payload.workflows)
    }

    async fn repository_data(&self, repo: &RepoId) -> Result<RepositoryData, DispatchError> {
        let repository: RepositoryPayload = self.get_json(&format!("/repos/{}/{}", repo.owner, repo.name)).await?;
        let branches: Vec<Branch> =
            self.get_json(&format!("/repos/{}/{}/branches?per_page=100", repo.owner, repo.name)).await?;

        Ok(RepositoryData { default_branch: repository.default_branch, branches })
    }

    async fn file_content(&self, repo: &RepoId, path: &str) -> Result<String, DispatchError> {
        let payload: serde_json::Value =
            self.get_json(&format!("/repos/{}/{}/contents/{}", repo.owner, repo.name, path)).await?;

        // A directory listing comes back as an array and a submodule/symlink
        // carries no "content" field; both degrade to an empty manifest.
        Ok(payload.get("content").and_then(serde_json::Value::as_str).unwrap_or_default().to_string())
    }

    async fn dispatch(&self, request: &DispatchRequest) -> Result<(), DispatchError> {
        let path = format!(
            "/repos/{}/{}/actions/workflows/{}/dispatches",
            request.repository.owner, request.repository.name, request.workflow_id
        );

        debug!(path, ref_name = %request.ref_name, "POST");

        let body = json!({ "ref": request.ref_name, "inputs": request.inputs });

        let response = self
            .request(reqwest::Method::POST, &path)
            .json(&body)
            .send()
            .await
            .map_err(|e| DispatchError::DispatchTransport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(DispatchError::DispatchTransport(Self::error_message(response).await));
        }

        Ok(())
    }
}
