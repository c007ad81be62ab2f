//! Error-object values
//!
//! Not an error *type* of this crate — a *value* representing a caught
//! error: a name, a message, and any own properties. `stack`-like
//! properties are excluded from comparison and rendering.

use std::sync::Arc;

use indexmap::IndexMap;

use crate::collections::object::Property;
use crate::core::value::Value;

#[derive(Debug)]
struct ErrorInner {
    name: String,
    message: String,
    properties: IndexMap<String, Property>,
}

/// A value representing an error object.
#[derive(Debug, Clone)]
pub struct ErrorObject {
    inner: Arc<ErrorInner>,
}

impl ErrorObject {
    /// Create an error object with no extra properties
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_properties(name, message, std::iter::empty::<(String, Value)>())
    }

    /// Create an error object with own properties
    pub fn with_properties<K: Into<String>>(
        name: impl Into<String>,
        message: impl Into<String>,
        properties: impl IntoIterator<Item = (K, Value)>,
    ) -> Self {
        Self {
            inner: Arc::new(ErrorInner {
                name: name.into(),
                message: message.into(),
                properties: properties
                    .into_iter()
                    .map(|(k, v)| (k.into(), Property::value(v)))
                    .collect(),
            }),
        }
    }

    /// Get the error name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Get the error message
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.inner.message
    }

    /// Get the number of own properties
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.properties.len()
    }

    /// Check if there are no own properties
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.properties.is_empty()
    }

    /// Get an own property by key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Property> {
        self.inner.properties.get(key)
    }

    /// Iterate over own properties
    pub fn properties(&self) -> indexmap::map::Iter<'_, String, Property> {
        self.inner.properties.iter()
    }

    /// Check if `other` shares this error's storage.
    #[must_use]
    pub fn same_storage(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}
