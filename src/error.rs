//! Error types.
//!
//! The grid's own operations cannot fail. Errors come from three places:
//! loading a [`GridConfig`](crate::grid::GridConfig), validating a form
//! [`Field`](crate::field::Field), and caller handlers reporting that an
//! action on a row did not go through.

use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum Error {
    /// The TOML document could not be parsed into a configuration.
    #[error("failed to parse grid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// The configuration parsed but holds an unusable value.
    #[error("invalid grid configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias for configuration operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure reported by a row or bulk action handler.
///
/// Handlers return `Result<(), ActionError>`. The grid turns a failure into
/// one status line (see [`failure_message`]) instead of every caller
/// formatting its own.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The action was refused, e.g. a confirmation was declined or a
    /// permission check failed.
    #[error("{0}")]
    Rejected(String),

    /// The record no longer exists.
    #[error("record not found")]
    NotFound,

    /// The record changed or is still referenced elsewhere.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Any other failure, typically a server message.
    #[error("{0}")]
    Failed(String),
}

impl ActionError {
    /// Shorthand for [`ActionError::Failed`].
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }
}

/// Outcome of a handler call.
pub type ActionResult = std::result::Result<(), ActionError>;

/// The user-visible line for a failed action: `"<Action> failed: <reason>"`.
pub fn failure_message(action: &str, err: &ActionError) -> String {
    format!("{} failed: {}", action, err)
}

/// Form field validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// A required field is blank.
    #[error("{label} is required")]
    Required {
        /// Field label.
        label: String,
    },

    /// The field's validator rejected the value.
    #[error("{label}: {message}")]
    Invalid {
        /// Field label.
        label: String,
        /// Validator message.
        message: String,
    },
}
