//! Binary data type
//!
//! Wraps `bytes::Bytes` behind an `Arc`, so clones share one handle and
//! handle identity follows the same `Arc::ptr_eq` scheme as the other
//! composites. The buffer pointer alone is not enough: `bytes` hands out
//! one shared static allocation for every empty buffer, which would make
//! two independently built empty values "the same object".

use std::fmt;
use std::sync::Arc;

/// Immutable binary buffer with shared storage.
#[derive(Debug, Clone)]
pub struct Bytes {
    inner: Arc<bytes::Bytes>,
}

impl Bytes {
    /// Create from a byte vector (takes ownership)
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            inner: Arc::new(bytes::Bytes::from(data)),
        }
    }

    /// Create from a static slice without copying
    pub fn from_static(data: &'static [u8]) -> Self {
        Self {
            inner: Arc::new(bytes::Bytes::from_static(data)),
        }
    }

    /// Get the bytes as a slice
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.inner
    }

    /// Get the byte length
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

    /// Check if `other` shares this value's storage.
    #[must_use]
    pub fn same_buffer(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for Bytes {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl Eq for Bytes {}

impl From<Vec<u8>> for Bytes {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl fmt::Display for Bytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bytes({})", self.inner.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_are_same_buffer() {
        let a = Bytes::new(vec![1, 2, 3]);
        let b = a.clone();
        assert!(a.same_buffer(&b));
    }

    #[test]
    fn equal_content_distinct_buffers() {
        let a = Bytes::new(vec![1, 2, 3]);
        let b = Bytes::new(vec![1, 2, 3]);
        assert_eq!(a, b);
        assert!(!a.same_buffer(&b));
    }

    #[test]
    fn rebuilt_empty_buffers_are_distinct() {
        let a = Bytes::new(Vec::new());
        let b = Bytes::new(Vec::new());
        assert_eq!(a, b);
        assert!(!a.same_buffer(&b));
        let c = a.clone();
        assert!(a.same_buffer(&c));
    }
}
