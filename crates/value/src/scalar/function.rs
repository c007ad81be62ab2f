//! Function values
//!
//! A callable handle with an optional name. Functions compare by
//! identity only; there is no structural equality for code.

use std::fmt;
use std::sync::Arc;

use crate::core::value::Value;

type Body = dyn Fn(&Value) -> Value + Send + Sync;

/// A named or anonymous callable over values.
#[derive(Clone)]
pub struct Function {
    name: Option<String>,
    body: Arc<Body>,
}

impl Function {
    /// Create a named function
    pub fn new(
        name: impl Into<String>,
        body: impl Fn(&Value) -> Value + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: Some(name.into()),
            body: Arc::new(body),
        }
    }

    /// Create an anonymous function
    pub fn anonymous(body: impl Fn(&Value) -> Value + Send + Sync + 'static) -> Self {
        Self {
            name: None,
            body: Arc::new(body),
        }
    }

    /// Get the function name, if any
    #[inline]
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Apply the function to a value
    #[must_use]
    pub fn call(&self, value: &Value) -> Value {
        (self.body)(value)
    }

    /// Check if `other` is a handle to the same function.
    #[must_use]
    pub fn same_function(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.body, &other.body)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "Function({name})"),
            None => write!(f, "Function(<anonymous>)"),
        }
    }
}
