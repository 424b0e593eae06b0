//! Form session state machine
//!
//! One session per dispatch form: `Idle -> Loading -> Ready -> Submitting ->
//! {Succeeded | Failed}`, with `Failed` returning to `Ready` so the user can
//! correct inputs and resubmit. Every load is tagged with a generation so a
//! superseded fetch can never overwrite a newer selection's state.

use crate::{error::DispatchError, manifest::WorkflowInput};

/// Observable phase of a dispatch form.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Idle,
    Loading,
    Ready,
    Submitting,
    Succeeded,
    Failed(String)
}

/// Per-form state: the currently selected workflow, its resolved inputs, and
/// the submit lifecycle.
#[derive(Debug)]
pub struct FormSession {
    state:       SessionState,
    generation:  u64,
    workflow_id: Option<u64>,
    inputs:      Vec<WorkflowInput>,
    notice:      Option<String>
}

impl FormSession {
    pub fn new() -> Self {
        Self { state: SessionState::Idle, generation: 0, workflow_id: None, inputs: Vec::new(), notice: None }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn workflow_id(&self) -> Option<u64> {
        self.workflow_id
    }

    pub fn inputs(&self) -> &[WorkflowInput] {
        &self.inputs
    }

    /// Recoverable notice raised while resolving the manifest, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Start resolving the form for a workflow selection.
    ///
    /// Returns the generation tag the caller must hand back on completion.
    /// Selecting a different workflow simply begins a new load; the previous
    /// generation becomes stale and its results will be discarded.
    pub fn begin_loading(&mut self, workflow_id: u64) -> u64 {
        self.generation += 1;
        self.workflow_id = Some(workflow_id);
        self.inputs.clear();
        self.notice = None;
        self.state = SessionState::Loading;
        self.generation
    }

    /// Complete a manifest load. Stale generations are ignored and the method
    /// reports whether the result was applied.
    pub fn complete_loading(&mut self, generation: u64, inputs: Vec<WorkflowInput>, notice: Option<String>) -> bool {
        if generation != self.generation {
            return false;
        }

        self.inputs = inputs;
        self.notice = notice;
        self.state = SessionState::Ready;
        true
    }

    /// Record a failed manifest fetch. The form becomes ready with zero
    /// inputs instead of hanging in `Loading`.
    pub fn fail_loading(&mut self, generation: u64, message: String) -> bool {
        self.complete_loading(generation, Vec::new(), Some(message))
    }

    pub fn can_submit(&self) -> bool {
        self.state == SessionState::Ready
    }

    /// Move to `Submitting`. Rejected while the schema is still resolving or
    /// while another submit is in flight; a submit never runs concurrently
    /// against the same form.
    pub fn begin_submit(&mut self) -> Result<(), DispatchError> {
        match self.state {
            SessionState::Ready => {
                self.state = SessionState::Submitting;
                Ok(())
            }
            SessionState::Submitting => Err(DispatchError::Generic("a run request is already in flight".to_string())),
            _ => Err(DispatchError::Generic("the dispatch form is not ready".to_string()))
        }
    }

    /// Record the dispatch outcome. A failure returns the session to a state
    /// the user can resubmit from.
    pub fn complete_submit(&mut self, result: &Result<(), DispatchError>) {
        self.state = match result {
            Ok(()) => SessionState::Succeeded,
            Err(err) => SessionState::Failed(err.to_string())
        };
    }

    /// Acknowledge a failed submit, returning to `Ready`.
    pub fn acknowledge_failure(&mut self) {
        if matches!(self.state, SessionState::Failed(_)) {
            self.state = SessionState::Ready;
        }
    }
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}
