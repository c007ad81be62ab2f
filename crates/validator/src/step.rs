//! Deferred chain steps
//!
//! Chain methods append steps; nothing runs until finalization. A step
//! is an action plus an optional error override attached afterwards.

use std::fmt;

use futures::future::BoxFuture;
use verity_value::{EqualityOptions, Value};

use crate::error::{BoxError, ErrorOverride};

/// Boxed custom transform. Receives the current value (absent values
/// arrive as `None`) and yields the replacement value or a rejection.
pub(crate) type CustomFn =
    Box<dyn FnOnce(Option<Value>) -> BoxFuture<'static, Result<Value, BoxError>> + Send>;

/// What a deferred step does when executed.
pub(crate) enum Action {
    /// Assert the value is not missing
    NotMissing,
    /// Assert the value is missing
    Missing,
    /// Marker that always succeeds
    NotRequired,
    /// Assert equality against an expected value
    Equal {
        expected: Value,
        options: EqualityOptions,
    },
    /// Assert inequality against a forbidden value
    NotEqual {
        expected: Value,
        options: EqualityOptions,
    },
    /// Assert membership in an allowed list
    In {
        allowed: Vec<Value>,
        options: EqualityOptions,
    },
    /// Assert absence from a forbidden list
    NotIn {
        forbidden: Vec<Value>,
        options: EqualityOptions,
    },
    /// Run a custom transform or assertion
    Custom(CustomFn),
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotMissing => f.write_str("NotMissing"),
            Self::Missing => f.write_str("Missing"),
            Self::NotRequired => f.write_str("NotRequired"),
            Self::Equal { expected, options } => f
                .debug_struct("Equal")
                .field("expected", expected)
                .field("options", options)
                .finish(),
            Self::NotEqual { expected, options } => f
                .debug_struct("NotEqual")
                .field("expected", expected)
                .field("options", options)
                .finish(),
            Self::In { allowed, options } => f
                .debug_struct("In")
                .field("allowed", allowed)
                .field("options", options)
                .finish(),
            Self::NotIn { forbidden, options } => f
                .debug_struct("NotIn")
                .field("forbidden", forbidden)
                .field("options", options)
                .finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// One deferred step: an action and its optional error override.
#[derive(Debug)]
pub(crate) struct Step {
    pub(crate) action: Action,
    pub(crate) error: Option<ErrorOverride>,
}

impl Step {
    pub(crate) fn new(action: Action) -> Self {
        Self {
            action,
            error: None,
        }
    }
}
