//! Map (key/value pairs with arbitrary keys) type
//!
//! Unlike [`Object`](crate::collections::Object), map keys are values
//! themselves. Entries keep insertion order for rendering; equality is
//! order-independent over `(key, value)` pairs.

use std::sync::Arc;

use crate::core::value::Value;

/// Key/value map whose keys are arbitrary values.
#[derive(Debug, Clone, Default)]
pub struct Map {
    inner: Arc<Vec<(Value, Value)>>,
}

impl Map {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of entries
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

    /// Iterate over entries in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, (Value, Value)> {
        self.inner.iter()
    }

    /// Check if `other` shares this map's storage.
    #[must_use]
    pub fn same_storage(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl From<Vec<(Value, Value)>> for Map {
    fn from(entries: Vec<(Value, Value)>) -> Self {
        Self {
            inner: Arc::new(entries),
        }
    }
}

impl FromIterator<(Value, Value)> for Map {
    fn from_iter<I: IntoIterator<Item = (Value, Value)>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = &'a (Value, Value);
    type IntoIter = std::slice::Iter<'a, (Value, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}
