//! UI port - interface for user interaction

use async_trait::async_trait;

use crate::error::DispatchError;

/// Port for prompting user input while filling the dispatch form.
#[async_trait]
pub trait Prompter: Send + Sync {
    /// Prompt for text input with optional default
    async fn prompt_text(&self, message: &str, default: Option<&str>) -> Result<String, DispatchError>;

    /// Prompt for selection from a list of options, cursor starting at `start`
    async fn prompt_select(&self, message: &str, options: Vec<String>, start: usize) -> Result<String, DispatchError>;

    /// Prompt for confirmation (yes/no)
    async fn prompt_confirm(&self, message: &str, default: bool) -> Result<bool, DispatchError>;
}
