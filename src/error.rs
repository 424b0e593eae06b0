//! Common error types used throughout the system

use thiserror::Error;

/// Common error types for the dispatcher.
///
/// Decode and NoTrigger are recoverable: the form layer degrades to an empty
/// input list and surfaces a single notice instead of aborting.
#[derive(Error, Debug, Clone)]
pub enum DispatchError {
    /// Manifest could not be decoded or parsed
    #[error("error loading workflow configuration: {0}")]
    Decode(String),

    /// Manifest has no manual-dispatch trigger
    #[error("no workflow_dispatch trigger found")]
    NoTrigger,

    /// Workflow file content could not be fetched
    #[error("failed to fetch workflow content: {0}")]
    ContentFetch(String),

    /// Remote resource does not exist
    #[error("not found: {0}")]
    NotFound(String),

    /// A required input is missing at submit time
    #[error("input '{0}' is required")]
    Validation(String),

    /// The dispatch call failed; carries the transport message verbatim
    #[error("failed sending run request: {0}")]
    DispatchTransport(String),

    /// Favorites store errors
    #[error("storage error: {0}")]
    Storage(String),

    /// Configuration related errors
    #[error("configuration error: {0}")]
    Configuration(String),

    /// User interaction errors
    #[error("{0}")]
    UserInteraction(String),

    /// Serialization/deserialization errors
    #[error("{0}")]
    Serialization(String),

    /// Generic errors with context
    #[error("{0}")]
    Generic(String)
}

impl DispatchError {
    /// Whether the form layer may recover by degrading to an empty input list.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, DispatchError::Decode(_) | DispatchError::NoTrigger)
    }
}

/// Convert from anyhow::Error
impl From<anyhow::Error> for DispatchError {
    fn from(err: anyhow::Error) -> Self {
        DispatchError::Generic(err.to_string())
    }
}

/// Convert from std::io::Error
impl From<std::io::Error> for DispatchError {
    fn from(err: std::io::Error) -> Self {
        DispatchError::Configuration(err.to_string())
    }
}

/// Convert from serde_yaml::Error
impl From<serde_yaml::Error> for DispatchError {
    fn from(err: serde_yaml::Error) -> Self {
        DispatchError::Serialization(err.to_string())
    }
}

/// Convert from serde_json::Error
impl From<serde_json::Error> for DispatchError {
    fn from(err: serde_json::Error) -> Self {
        DispatchError::Serialization(err.to_string())
    }
}
