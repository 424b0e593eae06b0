//! Dynamic form layer
//!
//! Derives field presentation, initial values, and validation rules from the
//! extracted input list, and drives the interactive prompts that fill the
//! form before dispatch.

pub mod field;
pub mod schema;
pub mod session;

pub use field::FieldSpec;
pub use session::{FormSession, SessionState};

use std::fmt::Display;

use indexmap::IndexMap;
use serde::Serialize;

use crate::{error::DispatchError, manifest::WorkflowInput, ports::ui::Prompter};

/// A single submitted form value.
///
/// Serializes untagged so the dispatch payload carries plain strings and
/// booleans, matching what the Actions API expects for `inputs`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FormValue {
    Text(String),
    Bool(bool)
}

impl FormValue {
    /// Empty text and `false` both fail a required-input check.
    pub fn is_empty(&self) -> bool {
        match self {
            FormValue::Text(text) => text.is_empty(),
            FormValue::Bool(flag) => !flag
        }
    }
}

impl Display for FormValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormValue::Text(text) => write!(f, "{}", text),
            FormValue::Bool(flag) => write!(f, "{}", flag)
        }
    }
}

/// Prompt for every input in declaration order and collect the value map.
///
/// Field semantics follow the mapped `FieldSpec`: choice inputs get a select
/// menu, booleans a confirm prompt, everything else a text prompt with the
/// declared default pre-filled. A choice input with zero options has nothing
/// to select; its value stays at the declared default.
pub async fn fill(
    prompter: &dyn Prompter,
    inputs: &[WorkflowInput]
) -> Result<IndexMap<String, FormValue>, DispatchError> {
    let mut values = IndexMap::new();

    for input in inputs {
        let value = match FieldSpec::for_input(input) {
            FieldSpec::Choice { options, default } => {
                if options.is_empty() {
                    FormValue::Text(default)
                } else {
                    let start = options.iter().position(|option| *option == default).unwrap_or(0);
                    FormValue::Text(prompter.prompt_select(&input.name, options, start).await?)
                }
            }
            FieldSpec::Boolean { default } => FormValue::Bool(prompter.prompt_confirm(&input.name, default).await?),
            FieldSpec::Text { default } => {
                let default = if default.is_empty() { None } else { Some(default.as_str()) };
                FormValue::Text(prompter.prompt_text(&input.name, default).await?)
            }
        };

        values.insert(input.name.clone(), value);
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::manifest::InputType;

    /// Prompter that replays scripted answers and records every prompt shown.
    struct ScriptedPrompter {
        answers:  Mutex<Vec<String>>,
        prompted: Mutex<Vec<String>>
    }

    impl ScriptedPrompter {
        fn new(answers: &[&str]) -> Self {
            let mut answers: Vec<String> = answers.iter().map(|s| s.to_string()).collect();
            answers.reverse();
            Self { answers: Mutex::new(answers), prompted: Mutex::new(Vec::new()) }
        }

        fn next(&self, message: &str) -> String {
            self.prompted.lock().unwrap().push(message.to_string());
            self.answers.lock().unwrap().pop().expect("scripted prompter ran out of answers")
        }
    }

    #[async_trait]
    impl Prompter for ScriptedPrompter {
        async fn prompt_text(&self, message: &str, _default: Option<&str>) -> Result<String, DispatchError> {
            Ok(self.next(message))
        }

        async fn prompt_select(
            &self,
            message: &str,
            _options: Vec<String>,
            _start: usize
        ) -> Result<String, DispatchError> {
            Ok(self.next(message))
        }

        async fn prompt_confirm(&self, message: &str, _default: bool) -> Result<bool, DispatchError> {
            Ok(self.next(message) == "yes")
        }
    }

    fn input(name: &str, input_type: InputType, default: &str, options: &[&str]) -> WorkflowInput {
        WorkflowInput {
            name:        name.to_string(),
            description: String::new(),
            default:     default.to_string(),
            required:    false,
            input_type,
            options:     options.iter().map(|s| s.to_string()).collect()
        }
    }

    #[tokio::test]
    async fn fills_fields_in_declaration_order() {
        let inputs = vec![
            input("env", InputType::Choice, "dev", &["dev", "prod"]),
            input("force", InputType::Boolean, "", &[]),
            input("tag", InputType::Text, "latest", &[]),
        ];
        let prompter = ScriptedPrompter::new(&["prod", "yes", "v2"]);

        let values = fill(&prompter, &inputs).await.unwrap();

        assert_eq!(prompter.prompted.lock().unwrap().as_slice(), ["env", "force", "tag"]);
        assert_eq!(values.get("env"), Some(&FormValue::Text("prod".to_string())));
        assert_eq!(values.get("force"), Some(&FormValue::Bool(true)));
        assert_eq!(values.get("tag"), Some(&FormValue::Text("v2".to_string())));
    }

    #[tokio::test]
    async fn choice_with_zero_options_is_not_prompted() {
        let inputs = vec![input("pick", InputType::Choice, "", &[])];
        let prompter = ScriptedPrompter::new(&[]);

        let values = fill(&prompter, &inputs).await.unwrap();

        assert!(prompter.prompted.lock().unwrap().is_empty());
        assert_eq!(values.get("pick"), Some(&FormValue::Text(String::new())));
    }

    #[test]
    fn empty_text_and_false_count_as_empty() {
        assert!(FormValue::Text(String::new()).is_empty());
        assert!(FormValue::Bool(false).is_empty());
        assert!(!FormValue::Text("x".to_string()).is_empty());
        assert!(!FormValue::Bool(true).is_empty());
    }

    #[test]
    fn serializes_as_plain_json_scalars() {
        assert_eq!(serde_json::to_string(&FormValue::Text("dev".to_string())).unwrap(), "\"dev\"");
        assert_eq!(serde_json::to_string(&FormValue::Bool(true)).unwrap(), "true");
    }
}
