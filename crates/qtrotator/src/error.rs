//! Rotator error types

use thiserror::Error;

/// Rotator-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RotatorError {
    /// A command was sent to a container that has no rotator yet
    #[error(
        "cannot call methods on rotator prior to initialization; attempted to call method '{command}'"
    )]
    NotInitialized { command: String },

    /// The name does not correspond to a public operation
    #[error("no such method '{0}' for rotator instance")]
    UnknownCommand(String),

    /// The container element is not part of the document
    #[error("rotator container element not found in document")]
    ContainerNotFound,
}

/// Result type for rotator operations
pub type Result<T> = std::result::Result<T, RotatorError>;
