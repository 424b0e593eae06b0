//! CLI command handlers

use super::RepoCommands;
use crate::{
    adapters::ui::run_spinner,
    config, dispatch,
    dispatch::{BRANCH_FIELD, DispatchRequest},
    error::DispatchError,
    favorites, form,
    form::FormSession,
    github::{RepoId, Workflow},
    manifest,
    ports::{api::ActionsApi, storage::KeyValueStore, ui::Prompter}
};

/// Handle the list command - print workflows with favorites first
pub async fn handle_list(api: &dyn ActionsApi, store: &dyn KeyValueStore, repo: &RepoId) -> Result<(), DispatchError> {
    let mut workflows = fetch_active_workflows(api, repo).await?;
    let ids = favorites::favorite_ids(store).await?;

    let starred = favorites::favorites_view(&workflows, &ids);
    if !starred.is_empty() {
        println!("Favorites:");
        for workflow in &starred {
            println!("  ★ {} ({})", workflow.name, workflow.file_name());
        }
        println!();
    }

    favorites::sort_by_name(&mut workflows);

    println!("Workflows in {}:", repo);
    for workflow in &workflows {
        let marker = if favorites::is_favorite(workflow, &ids) { "★ " } else { "" };
        println!("  {}{} ({})", marker, workflow.name, workflow.file_name());
    }

    Ok(())
}

/// Handle the run command - resolve the input form and send one run request
pub async fn handle_run(
    api: &dyn ActionsApi,
    prompter: &dyn Prompter,
    repo: &RepoId,
    name: Option<&str>,
    branch: Option<&str>,
    use_defaults: bool
) -> Result<(), DispatchError> {
    let mut workflows = fetch_active_workflows(api, repo).await?;
    favorites::sort_by_name(&mut workflows);

    let workflow = select_workflow(prompter, &workflows, name).await?;

    let mut session = FormSession::new();
    let generation = session.begin_loading(workflow.id);

    let spinner = run_spinner("Loading workflow inputs");
    let loaded = tokio::try_join!(api.repository_data(repo), api.file_content(repo, &workflow.path));
    spinner.finish_and_clear();

    let (repository, raw_content) = loaded?;
    let (inputs, notice) = manifest::inputs_or_empty(&raw_content);
    session.complete_loading(generation, inputs, notice.map(|err| err.to_string()));

    if let Some(notice) = session.notice() {
        println!("⚠️  {}", notice);
    }

    // Defaults mode stands in for the filled form: declared defaults become
    // the values and the default branch is used, with no prompting at all.
    let values = if use_defaults {
        form::schema::initial_values(session.inputs())
    } else {
        form::fill(prompter, session.inputs()).await?
    };

    let ref_name = match branch {
        Some(branch) => branch.to_string(),
        None if use_defaults || repository.branches.is_empty() => repository.default_branch.clone(),
        None => {
            let names: Vec<String> = repository.branches.iter().map(|branch| branch.name.clone()).collect();
            let start = names.iter().position(|name| *name == repository.default_branch).unwrap_or(0);
            prompter.prompt_select(BRANCH_FIELD, names, start).await?
        }
    };

    session.begin_submit()?;

    let request = DispatchRequest::new(workflow.id, repo.clone(), ref_name, values);

    let spinner = run_spinner("Sending run request");
    let result = dispatch::submit(api, session.inputs(), &request).await;
    session.complete_submit(&result);

    match &result {
        Ok(()) => {
            spinner.finish_with_message(format!("Sent run request for '{}' on {}", workflow.name, request.ref_name));
            println!("View runs: {}", workflow.browser_url(repo));
        }
        Err(_) => spinner.finish_and_clear()
    }

    result
}

/// Handle the favorite command - flip favorite membership for one workflow
pub async fn handle_favorite(
    api: &dyn ActionsApi,
    store: &dyn KeyValueStore,
    prompter: &dyn Prompter,
    repo: &RepoId,
    name: Option<&str>
) -> Result<(), DispatchError> {
    let mut workflows = fetch_active_workflows(api, repo).await?;
    favorites::sort_by_name(&mut workflows);

    let workflow = select_workflow(prompter, &workflows, name).await?;
    let ids = favorites::toggle(store, workflow.id).await?;

    if ids.contains(&workflow.id) {
        println!("Added '{}' to favorites", workflow.name);
    } else {
        println!("Removed '{}' from favorites", workflow.name);
    }

    Ok(())
}

/// Handle repository configuration commands
pub async fn handle_repo_command(command: &RepoCommands) -> Result<(), DispatchError> {
    match command {
        RepoCommands::Set { repository } => {
            repository.parse::<RepoId>()?;
            config::set_repository(repository)?;
            println!("Default repository set to {}", repository);
        }
        RepoCommands::Current => match config::get_current_repository()? {
            Some(repository) => println!("{}", repository),
            None => println!("No default repository configured")
        }
    }

    Ok(())
}

/// Fetch the workflow listing behind a spinner, keeping only active entries.
async fn fetch_active_workflows(api: &dyn ActionsApi, repo: &RepoId) -> Result<Vec<Workflow>, DispatchError> {
    let spinner = run_spinner("Fetching workflows");
    let result = api.list_workflows(repo).await;
    spinner.finish_and_clear();

    let workflows: Vec<Workflow> = result?.into_iter().filter(|workflow| workflow.is_active()).collect();

    if workflows.is_empty() {
        return Err(DispatchError::NotFound("no active workflows in this repository".to_string()));
    }

    Ok(workflows)
}

/// Resolve a workflow from an explicit name or an interactive selection menu.
async fn select_workflow(
    prompter: &dyn Prompter,
    workflows: &[Workflow],
    name: Option<&str>
) -> Result<Workflow, DispatchError> {
    if let Some(name) = name {
        return workflows
            .iter()
            .find(|workflow| workflow.name == name || workflow.file_name() == name)
            .cloned()
            .ok_or_else(|| DispatchError::NotFound(format!("workflow '{}'", name)));
    }

    let labels: Vec<String> =
        workflows.iter().map(|workflow| format!("{} ({})", workflow.name, workflow.file_name())).collect();

    let picked = prompter.prompt_select("workflow", labels.clone(), 0).await?;
    let index = labels
        .iter()
        .position(|label| *label == picked)
        .ok_or_else(|| DispatchError::NotFound(format!("workflow '{}'", picked)))?;

    Ok(workflows[index].clone())
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use base64::{Engine as _, engine::general_purpose::STANDARD};

    use super::*;
    use crate::{
        form::FormValue,
        github::{Branch, RepositoryData}
    };

    /// Api double serving one workflow and recording the dispatched request.
    struct SingleWorkflowApi {
        manifest:   String,
        dispatched: Mutex<Option<DispatchRequest>>
    }

    impl SingleWorkflowApi {
        fn new(manifest_yaml: &str) -> Self {
            Self { manifest: STANDARD.encode(manifest_yaml), dispatched: Mutex::new(None) }
        }
    }

    #[async_trait]
    impl ActionsApi for SingleWorkflowApi {
        async fn list_workflows(&self, _repo: &RepoId) -> Result<Vec<Workflow>, DispatchError> {
            Ok(vec![Workflow {
                id:    7,
                name:  "Deploy".to_string(),
                path:  ".github/workflows/deploy.yml".to_string(),
                state: "active".to_string()
            }])
        }

        async fn repository_data(&self, _repo: &RepoId) -> Result<RepositoryData, DispatchError> {
            Ok(RepositoryData {
                default_branch: "main".to_string(),
                branches:       vec![Branch { name: "dev".to_string() }, Branch { name: "main".to_string() }]
            })
        }

        async fn file_content(&self, _repo: &RepoId, _path: &str) -> Result<String, DispatchError> {
            Ok(self.manifest.clone())
        }

        async fn dispatch(&self, request: &DispatchRequest) -> Result<(), DispatchError> {
            *self.dispatched.lock().unwrap() = Some(request.clone());
            Ok(())
        }
    }

    /// Prompter that fails the test on any interaction.
    struct NoPrompter;

    #[async_trait]
    impl Prompter for NoPrompter {
        async fn prompt_text(&self, message: &str, _default: Option<&str>) -> Result<String, DispatchError> {
            panic!("unexpected text prompt: {}", message);
        }

        async fn prompt_select(
            &self,
            message: &str,
            _options: Vec<String>,
            _start: usize
        ) -> Result<String, DispatchError> {
            panic!("unexpected select prompt: {}", message);
        }

        async fn prompt_confirm(&self, message: &str, _default: bool) -> Result<bool, DispatchError> {
            panic!("unexpected confirm prompt: {}", message);
        }
    }

    fn manifest_with_required_default() -> &'static str {
        "on:\n  workflow_dispatch:\n    inputs:\n      env:\n        type: choice\n        required: true\n        \
         default: \"qa\"\n        options: [qa, prod]\n      force:\n        type: boolean\n        default: \"true\"\n"
    }

    #[tokio::test]
    async fn defaults_run_sends_declared_defaults_without_prompting() {
        let api = SingleWorkflowApi::new(manifest_with_required_default());
        let repo: RepoId = "octo/widgets".parse().unwrap();

        handle_run(&api, &NoPrompter, &repo, Some("Deploy"), None, true).await.unwrap();

        let request = api.dispatched.lock().unwrap().clone().expect("run request was never sent");
        assert_eq!(request.ref_name, "main");
        assert_eq!(request.inputs.get("env"), Some(&FormValue::Text("qa".to_string())));
        assert_eq!(request.inputs.get("force"), Some(&FormValue::Bool(true)));
    }

    #[tokio::test]
    async fn defaults_run_honors_an_explicit_branch_flag() {
        let api = SingleWorkflowApi::new(manifest_with_required_default());
        let repo: RepoId = "octo/widgets".parse().unwrap();

        handle_run(&api, &NoPrompter, &repo, Some("deploy.yml"), Some("dev"), true).await.unwrap();

        let request = api.dispatched.lock().unwrap().clone().expect("run request was never sent");
        assert_eq!(request.ref_name, "dev");
    }
}
