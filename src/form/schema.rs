//! Form schema derivation
//!
//! Pure functions of the input list: initial values and validation rules are
//! recomputed whenever the list changes and carry no hidden state.

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::{
    form::{FieldSpec, FormValue},
    manifest::WorkflowInput
};

/// Validation rule set for one input. Currently only required-ness; an input
/// with no entry in the rule map is unconstrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRule {
    pub required: bool
}

/// Map each input name to its pre-filled value.
///
/// Boolean fields start from the mapped boolean default, everything else from
/// the declared default text.
pub fn initial_values(inputs: &[WorkflowInput]) -> IndexMap<String, FormValue> {
    inputs
        .iter()
        .map(|input| {
            let value = match FieldSpec::for_input(input) {
                FieldSpec::Boolean { default } => FormValue::Bool(default),
                FieldSpec::Choice { default, .. } | FieldSpec::Text { default } => FormValue::Text(default)
            };
            (input.name.clone(), value)
        })
        .collect()
}

/// Map each required input name to `{ required: true }`.
///
/// Non-required inputs get no entry at all; callers must treat a missing key
/// as "no constraint" rather than `required: false`.
pub fn validation_rules(inputs: &[WorkflowInput]) -> HashMap<String, ValidationRule> {
    inputs
        .iter()
        .filter(|input| input.required)
        .map(|input| (input.name.clone(), ValidationRule { required: true }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::InputType;

    fn input(name: &str, input_type: InputType, default: &str, required: bool) -> WorkflowInput {
        WorkflowInput {
            name: name.to_string(),
            description: String::new(),
            default: default.to_string(),
            required,
            input_type,
            options: Vec::new()
        }
    }

    #[test]
    fn initial_values_follow_field_semantics() {
        let inputs = vec![
            input("tag", InputType::Text, "latest", false),
            input("force", InputType::Boolean, "true", false),
            input("dry_run", InputType::Boolean, "false", false),
        ];

        let values = initial_values(&inputs);
        assert_eq!(values.get("tag"), Some(&FormValue::Text("latest".to_string())));
        assert_eq!(values.get("force"), Some(&FormValue::Bool(true)));
        assert_eq!(values.get("dry_run"), Some(&FormValue::Bool(false)));
    }

    #[test]
    fn initial_values_preserve_input_order() {
        let inputs = vec![input("zeta", InputType::Text, "", false), input("alpha", InputType::Text, "", false)];
        let values = initial_values(&inputs);
        let names: Vec<&String> = values.keys().collect();
        assert_eq!(names, ["zeta", "alpha"]);
    }

    #[test]
    fn validation_rules_omit_non_required_inputs() {
        let inputs = vec![input("needed", InputType::Text, "", true), input("optional", InputType::Text, "", false)];

        let rules = validation_rules(&inputs);
        assert_eq!(rules.len(), 1);
        assert_eq!(rules.get("needed"), Some(&ValidationRule { required: true }));
        assert!(!rules.contains_key("optional"));
    }

    #[test]
    fn schema_is_a_total_function_of_the_input_list() {
        let inputs = vec![input("a", InputType::Text, "x", true), input("b", InputType::Boolean, "true", false)];
        assert_eq!(initial_values(&inputs), initial_values(&inputs));
        assert_eq!(validation_rules(&inputs), validation_rules(&inputs));
    }
}
