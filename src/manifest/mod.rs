//! Workflow manifest parsing
//!
//! Turns the raw base64 payload returned by the contents API into the ordered
//! list of `workflow_dispatch` inputs the form layer is built from.

pub mod decoder;
pub mod inputs;

pub use decoder::decode;
pub use inputs::{InputType, WorkflowInput, extract};

use crate::error::DispatchError;

/// Decode and extract in one step, degrading recoverable failures to an empty
/// input list.
///
/// A malformed manifest or a missing `workflow_dispatch` trigger must not
/// block the form: the caller gets zero inputs plus exactly one error to
/// surface as a user notice. Empty content means "no manifest" and produces
/// no notice at all.
pub fn inputs_or_empty(raw_content: &str) -> (Vec<WorkflowInput>, Option<DispatchError>) {
    if raw_content.trim().is_empty() {
        return (Vec::new(), None);
    }

    let doc = match decode(raw_content) {
        Ok(doc) => doc,
        Err(err) => return (Vec::new(), Some(err))
    };

    match extract(&doc) {
        Ok(inputs) => (inputs, None),
        Err(err) => (Vec::new(), Some(err))
    }
}
