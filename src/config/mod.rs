use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Configuration structure for the dispatch CLI
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Default repository in `owner/name` form
    pub repository: Option<String>,
    /// GitHub API base URL
    #[serde(default = "default_api_url")]
    pub api_url:    String
}

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self { repository: None, api_url: default_api_url() }
    }
}

/// Get the project directories for cross-platform config path resolution
pub fn get_project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("", "", "gh-dispatch").context("Failed to determine project directories")
}

/// Get the configuration directory path
pub fn get_config_dir() -> Result<PathBuf> {
    let project_dirs = get_project_dirs()?;
    Ok(project_dirs.config_dir().to_path_buf())
}

/// Get the config file path
pub fn get_config_file_path() -> Result<PathBuf> {
    let config_dir = get_config_dir()?;
    Ok(config_dir.join("config.yaml"))
}

/// Get the path of the favorites database
pub fn get_favorites_db_path() -> Result<PathBuf> {
    let project_dirs = get_project_dirs()?;
    Ok(project_dirs.data_dir().join("favorites"))
}

/// Load configuration from file or create default if it doesn't exist
pub fn load_config() -> Result<Config> {
    let config_path = get_config_file_path()?;

    if config_path.exists() {
        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        serde_yaml::from_str(&content).with_context(|| "Failed to parse config file")
    } else {
        let config = Config::default();
        save_config(&config)?;
        Ok(config)
    }
}

/// Save configuration to file
pub fn save_config(config: &Config) -> Result<()> {
    let config_path = get_config_file_path()?;

    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
    }

    let content = serde_yaml::to_string(config).context("Failed to serialize config")?;

    fs::write(&config_path, content)
        .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

    Ok(())
}

/// Set the default repository in configuration
pub fn set_repository(repository: &str) -> Result<()> {
    let mut config = load_config()?;
    config.repository = Some(repository.to_string());
    save_config(&config)?;
    Ok(())
}

/// Get the currently configured default repository
pub fn get_current_repository() -> Result<Option<String>> {
    let config = load_config()?;
    Ok(config.repository)
}

/// Read the API token from the environment
pub fn api_token() -> Option<String> {
    std::env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty())
}
