//! Set (unordered multiset) type
//!
//! Members keep insertion order for rendering, but equality is
//! order-independent (see the equality engine). Backed by
//! `Arc<Vec<Value>>` like [`Array`](crate::collections::Array); a
//! hash-backed set would need `Hash` over floats and shared handles,
//! which the identity semantics rule out.

use std::sync::Arc;

use crate::core::value::Value;

/// Unordered collection of values with shared storage.
#[derive(Debug, Clone, Default)]
pub struct Set {
    inner: Arc<Vec<Value>>,
}

impl Set {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of members
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterate over members in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.inner.iter()
    }

    /// Check if `other` shares this set's storage.
    #[must_use]
    pub fn same_storage(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl From<Vec<Value>> for Set {
    fn from(items: Vec<Value>) -> Self {
        Self {
            inner: Arc::new(items),
        }
    }
}

impl FromIterator<Value> for Set {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'a> IntoIterator for &'a Set {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}
