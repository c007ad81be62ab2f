//! Validation failures and error overrides
//!
//! Built-in assertions raise [`ValidationError`] with a fully
//! pre-formatted message. Callers can replace a failure through an
//! [`ErrorOverride`]: a plain message, a pre-built error used as-is, or
//! a lazy factory receiving the value under validation.

use std::fmt;

use thiserror::Error;
use verity_value::Value;

/// Boxed error accepted at override and custom-step boundaries.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failure raised by a built-in assertion.
///
/// Carries nothing beyond its message; the message itself already
/// includes the subject name and any diff output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    /// Create a failure with a pre-formatted message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Get the failure message
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Error returned by chain finalization.
#[derive(Debug, Error)]
pub enum ChainError {
    /// A built-in assertion failed
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A pre-built override error, raised as-is
    #[error("{0}")]
    Overridden(BoxError),

    /// A custom step rejected the value
    #[error("{0}")]
    Custom(BoxError),

    /// An error override was attached with no step to attach it to
    #[error("error override attached with no preceding step")]
    Misuse,
}

type Factory = Box<dyn FnOnce(Option<&Value>) -> ErrorOverride + Send>;

/// Replacement for a failure, evaluated only when the failure happens.
pub enum ErrorOverride {
    /// A plain message, wrapped in [`ValidationError`] without the
    /// usual `Validation failed` prefix
    Message(String),
    /// A pre-built error, raised as-is
    Error(BoxError),
    /// A factory receiving the current value, returning another override
    Factory(Factory),
}

impl ErrorOverride {
    /// Override with a plain message
    pub fn message(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }

    /// Override with a pre-built error
    pub fn error(error: impl Into<BoxError>) -> Self {
        Self::Error(error.into())
    }

    /// Override lazily: the factory sees the value under validation
    pub fn with(factory: impl FnOnce(Option<&Value>) -> Self + Send + 'static) -> Self {
        Self::Factory(Box::new(factory))
    }

    /// Turn this override into the error to raise.
    pub(crate) fn resolve(self, value: Option<&Value>) -> ChainError {
        match self {
            Self::Message(message) => ChainError::Validation(ValidationError::new(message)),
            Self::Error(error) => ChainError::Overridden(error),
            Self::Factory(factory) => factory(value).resolve(value),
        }
    }
}

impl From<&str> for ErrorOverride {
    fn from(message: &str) -> Self {
        Self::Message(message.to_string())
    }
}

impl From<String> for ErrorOverride {
    fn from(message: String) -> Self {
        Self::Message(message)
    }
}

impl fmt::Debug for ErrorOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Message(message) => f.debug_tuple("Message").field(message).finish(),
            Self::Error(error) => f.debug_tuple("Error").field(error).finish(),
            Self::Factory(_) => f.write_str("Factory(..)"),
        }
    }
}
