//! Dispatch submission
//!
//! Validates the filled form against the current input list and issues the
//! single run request through the Actions API port. Validation failures never
//! reach the remote backend.

use indexmap::IndexMap;
use tracing::info;

use crate::{
    error::DispatchError,
    form::{FormValue, schema},
    github::RepoId,
    manifest::WorkflowInput,
    ports::api::ActionsApi
};

/// Reserved form field carrying the dispatch ref; it is a dispatch parameter,
/// never part of the workflow inputs payload.
pub const BRANCH_FIELD: &str = "branch";

/// One run request, built once form validation succeeds.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchRequest {
    /// Identifier of the workflow to run
    pub workflow_id: u64,
    /// Target repository
    pub repository:  RepoId,
    /// Git ref (branch) to run against
    pub ref_name:    String,
    /// Input values keyed by input name
    pub inputs:      IndexMap<String, FormValue>
}

impl DispatchRequest {
    /// Build a request from submitted form values, excluding the reserved
    /// `branch` selector field from the inputs payload.
    pub fn new(workflow_id: u64, repository: RepoId, ref_name: String, mut values: IndexMap<String, FormValue>) -> Self {
        values.shift_remove(BRANCH_FIELD);
        Self { workflow_id, repository, ref_name, inputs: values }
    }
}

/// Check the submitted values against the derived validation rules.
///
/// Fails with the first missing input in declaration order; an empty string
/// or an unticked checkbox does not satisfy a required input. An input with
/// no rule entry is unconstrained.
pub fn validate(inputs: &[WorkflowInput], values: &IndexMap<String, FormValue>) -> Result<(), DispatchError> {
    let rules = schema::validation_rules(inputs);

    for input in inputs {
        let required = rules.get(&input.name).map(|rule| rule.required).unwrap_or(false);
        if !required {
            continue;
        }

        let satisfied = values.get(&input.name).map(|value| !value.is_empty()).unwrap_or(false);
        if !satisfied {
            return Err(DispatchError::Validation(input.name.clone()));
        }
    }

    Ok(())
}

/// Validate and send exactly one run request.
///
/// No automatic retry and no idempotency: submitting the same request twice
/// queues two runs. The caller reports in-flight/success/failure around this.
pub async fn submit(
    api: &dyn ActionsApi,
    inputs: &[WorkflowInput],
    request: &DispatchRequest
) -> Result<(), DispatchError> {
    validate(inputs, &request.inputs)?;

    info!(
        workflow_id = request.workflow_id,
        repository = %request.repository,
        ref_name = %request.ref_name,
        "sending run request"
    );

    api.dispatch(request).await
}
