//! Field type mapping
//!
//! Maps each declared input type to a form-field presentation contract. This
//! layer decides presentation only; validation lives with the schema builder
//! and the submitter.

use crate::manifest::{InputType, WorkflowInput};

/// Presentation contract for one form field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldSpec {
    /// Dropdown with enumerated options
    Choice { options: Vec<String>, default: String },
    /// Checkbox with a boolean default
    Boolean { default: bool },
    /// Free text field
    Text { default: String }
}

impl FieldSpec {
    /// Map an input to its field semantics.
    ///
    /// The manifest default is text, so the boolean default is obtained by
    /// comparing against the literal `"true"`. Anything else - `"false"`, the
    /// empty string, `"True"` - yields `false`. Known edge case, kept as
    /// observed behavior.
    pub fn for_input(input: &WorkflowInput) -> Self {
        match input.input_type {
            InputType::Choice => FieldSpec::Choice { options: input.options.clone(), default: input.default.clone() },
            InputType::Boolean => FieldSpec::Boolean { default: input.default == "true" },
            InputType::Text => FieldSpec::Text { default: input.default.clone() }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(input_type: InputType, default: &str, options: &[&str]) -> WorkflowInput {
        WorkflowInput {
            name:        "field".to_string(),
            description: String::new(),
            default:     default.to_string(),
            required:    false,
            input_type,
            options:     options.iter().map(|s| s.to_string()).collect()
        }
    }

    #[test]
    fn choice_carries_options_and_default() {
        let spec = FieldSpec::for_input(&input(InputType::Choice, "dev", &["dev", "prod"]));
        assert_eq!(
            spec,
            FieldSpec::Choice { options: vec!["dev".to_string(), "prod".to_string()], default: "dev".to_string() }
        );
    }

    #[test]
    fn boolean_default_is_a_literal_text_comparison() {
        assert_eq!(FieldSpec::for_input(&input(InputType::Boolean, "true", &[])), FieldSpec::Boolean { default: true });
        assert_eq!(
            FieldSpec::for_input(&input(InputType::Boolean, "false", &[])),
            FieldSpec::Boolean { default: false }
        );
        assert_eq!(FieldSpec::for_input(&input(InputType::Boolean, "", &[])), FieldSpec::Boolean { default: false });
        // "True" is not the literal "true"; kept as observed behavior.
        assert_eq!(
            FieldSpec::for_input(&input(InputType::Boolean, "True", &[])),
            FieldSpec::Boolean { default: false }
        );
    }

    #[test]
    fn everything_else_is_a_text_field() {
        let spec = FieldSpec::for_input(&input(InputType::Text, "latest", &[]));
        assert_eq!(spec, FieldSpec::Text { default: "latest".to_string() });
    }

    #[test]
    fn choice_with_empty_options_keeps_zero_selectable_values() {
        let spec = FieldSpec::for_input(&input(InputType::Choice, "", &[]));
        assert_eq!(spec, FieldSpec::Choice { options: Vec::new(), default: String::new() });
    }
}
