//! Array (ordered sequence) type
//!
//! Wraps `Arc<Vec<Value>>`: clones share storage, and pointer identity
//! distinguishes "the same array" from "an equal array".

use std::sync::Arc;

use crate::core::value::Value;

/// Ordered sequence of values with shared storage.
#[derive(Debug, Clone, Default)]
pub struct Array {
    inner: Arc<Vec<Value>>,
}

impl Array {
    /// Create an empty array
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of elements
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

    /// Get element by index
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.inner.get(index)
    }

    /// Iterate over elements
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.inner.iter()
    }

    /// Check if `other` shares this array's storage.
    #[must_use]
    pub fn same_storage(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl From<Vec<Value>> for Array {
    fn from(items: Vec<Value>) -> Self {
        Self {
            inner: Arc::new(items),
        }
    }
}

impl FromIterator<Value> for Array {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_storage() {
        let a: Array = vec![Value::integer(1), Value::integer(2)].into();
        let b = a.clone();
        assert!(a.same_storage(&b));
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn rebuilt_arrays_do_not() {
        let a: Array = vec![Value::integer(1)].into();
        let b: Array = vec![Value::integer(1)].into();
        assert!(!a.same_storage(&b));
    }
}
