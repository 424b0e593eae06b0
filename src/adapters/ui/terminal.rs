//! Terminal-based implementation of the UI port

use async_trait::async_trait;
use indicatif::{ProgressBar, ProgressStyle};
use inquire::{Confirm, Select, Text};

use crate::{error::DispatchError, ports::ui::Prompter};

/// Terminal implementation of Prompter
pub struct TerminalPrompter;

impl TerminalPrompter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Prompter for TerminalPrompter {
    async fn prompt_text(&self, message: &str, default: Option<&str>) -> Result<String, DispatchError> {
        let mut prompt = Text::new(message);

        if let Some(default_value) = default {
            prompt = prompt.with_default(default_value);
        }

        prompt.prompt().map_err(|e| DispatchError::UserInteraction(e.to_string()))
    }

    async fn prompt_select(&self, message: &str, options: Vec<String>, start: usize) -> Result<String, DispatchError> {
        Select::new(message, options)
            .with_page_size(10)
            .with_starting_cursor(start)
            .prompt()
            .map_err(|e| DispatchError::UserInteraction(e.to_string()))
    }

    async fn prompt_confirm(&self, message: &str, default: bool) -> Result<bool, DispatchError> {
        Confirm::new(message)
            .with_default(default)
            .prompt()
            .map_err(|e| DispatchError::UserInteraction(e.to_string()))
    }
}

/// Create a spinner for a long-running request.
pub fn run_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner().template("{spinner:.green} {msg}").expect("Failed to create spinner style")
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));
    spinner
}
