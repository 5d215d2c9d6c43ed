//! Error types for financial formulas.

use thiserror::Error;

/// A specialized Result type for financial formulas.
pub type FinanceResult<T> = Result<T, FinanceError>;

/// Errors that can occur when evaluating a financial formula.
///
/// Formula calls only ever fail with [`FinanceError::InvalidArgument`]:
/// every precondition is checked before any arithmetic happens, so a
/// failed call has no partial result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FinanceError {
    /// An input violated a domain or type precondition.
    #[error("Invalid argument '{parameter}': {reason}")]
    InvalidArgument {
        /// Name of the offending parameter.
        parameter: String,
        /// Description of the violated precondition.
        reason: String,
    },

    /// A calculator configuration was rejected.
    #[error("Invalid configuration '{field}': {message}")]
    Config {
        /// Field that failed validation.
        field: String,
        /// Validation error message.
        message: String,
    },
}

impl FinanceError {
    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Config {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns true if this is an invalid argument error.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

impl From<serde_json::Error> for FinanceError {
    fn from(err: serde_json::Error) -> Self {
        Self::config("json", err.to_string())
    }
}
