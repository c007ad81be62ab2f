//! Opaque handles
//!
//! A named reference to state whose contents cannot be enumerated
//! (external resources, weakly held collections). Opaque values are
//! intentionally invisible to structural equality and render without
//! contents.

use std::fmt;
use std::sync::Arc;

#[derive(Debug)]
struct OpaqueInner {
    type_name: String,
}

/// A handle whose contents are unknown by design.
#[derive(Debug, Clone)]
pub struct Opaque {
    inner: Arc<OpaqueInner>,
}

impl Opaque {
    /// Create a new opaque handle with the given type name
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(OpaqueInner {
                type_name: type_name.into(),
            }),
        }
    }

    /// Get the type name
    #[inline]
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.inner.type_name
    }

    /// Check if `other` is the same handle.
    #[must_use]
    pub fn same_handle(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Display for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} (items unknown)]", self.inner.type_name)
    }
}
