//! Input extraction from parsed manifests
//!
//! Walks the parsed document down to `on.workflow_dispatch.inputs` and
//! projects every declared parameter into a typed `WorkflowInput`, preserving
//! manifest declaration order.

use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use tracing::debug;

use crate::error::DispatchError;

/// One declared parameter of the manual-dispatch trigger.
///
/// # Example YAML structure
/// ```yaml
/// on:
///   workflow_dispatch:
///     inputs:
///       environment:
///         description: "Deploy target"
///         default: dev
///         required: true
///         type: choice
///         options: [dev, prod]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowInput {
    /// Field name, unique key in both the form and the dispatch payload
    pub name:        String,
    /// Human-readable hint (preserved, not currently rendered)
    pub description: String,
    /// Pre-filled value before user edits; always kept as manifest text
    pub default:     String,
    /// Whether a non-empty/non-false value is required at submit time
    pub required:    bool,
    /// Declared type tag, unknown tags collapse to free text
    pub input_type:  InputType,
    /// Enumerated legal values, only meaningful for choice inputs
    pub options:     Vec<String>
}

/// Supported input type tags.
///
/// The manifest may carry arbitrary tags ("environment", "number", ...);
/// anything that is not `choice` or `boolean` is treated as free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    Choice,
    Boolean,
    Text
}

impl InputType {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "choice" => InputType::Choice,
            "boolean" => InputType::Boolean,
            _ => InputType::Text
        }
    }
}

/// Extract the ordered input list from a parsed manifest.
///
/// # Returns
/// * `Ok(inputs)` - one record per declared input, in declaration order
/// * `Err(NoTrigger)` - the manifest has no usable `workflow_dispatch` node
///
/// A bare `workflow_dispatch:` parses to null and counts as absent. A present
/// trigger without an `inputs` key is a valid zero-parameter workflow.
pub fn extract(doc: &Value) -> Result<Vec<WorkflowInput>, DispatchError> {
    let dispatch = match doc.get("on").and_then(|on| on.get("workflow_dispatch")) {
        Some(node) if !node.is_null() => node,
        _ => return Err(DispatchError::NoTrigger)
    };

    let Some(declared) = dispatch.get("inputs").and_then(Value::as_mapping) else {
        return Ok(Vec::new());
    };

    let inputs: Vec<WorkflowInput> = declared
        .iter()
        .filter_map(|(key, spec)| key.as_str().map(|name| project_input(name, spec)))
        .collect();

    debug!(count = inputs.len(), "extracted workflow_dispatch inputs");

    Ok(inputs)
}

/// Build one input record, defaulting every missing field to its empty value.
///
/// Non-string `default`/`description` scalars (a real YAML boolean, a number)
/// degrade to the empty string; the literal-text boolean comparison downstream
/// depends on this.
fn project_input(name: &str, spec: &Value) -> WorkflowInput {
    let tag = str_field(spec, "type");

    WorkflowInput {
        name:        name.to_string(),
        description: str_field(spec, "description"),
        default:     str_field(spec, "default"),
        required:    spec.get("required").and_then(Value::as_bool).unwrap_or(false),
        input_type:  InputType::from_tag(&tag),
        options:     spec
            .get("options")
            .and_then(Value::as_sequence)
            .map(|seq| seq.iter().filter_map(Value::as_str).map(str::to_string).collect())
            .unwrap_or_default()
    }
}

fn str_field(spec: &Value, key: &str) -> String {
    spec.get(key).and_then(Value::as_str).unwrap_or_default().to_string()
}
