//! Regular expression pattern type
//!
//! Wraps a compiled `regex::Regex` behind an `Arc`: clones share the
//! compiled program, and pointer identity distinguishes two handles to
//! the same pattern object from two independently compiled patterns.

use std::fmt;
use std::sync::Arc;

use regex::Regex;

use crate::core::error::{ValueError, ValueResult};

/// Compiled regular expression with shared storage.
#[derive(Debug, Clone)]
pub struct Pattern {
    inner: Arc<Regex>,
}

impl Pattern {
    /// Compile a new pattern.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::InvalidPattern`] if the source does not
    /// compile.
    pub fn new(source: &str) -> ValueResult<Self> {
        let regex =
            Regex::new(source).map_err(|e| ValueError::InvalidPattern(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(regex),
        })
    }

    /// Get the pattern source
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.inner.as_str()
    }

    /// Test whether the pattern matches `haystack`
    #[must_use]
    pub fn is_match(&self, haystack: &str) -> bool {
        self.inner.is_match(haystack)
    }

    /// Check if `other` is a handle to the same compiled pattern.
    #[must_use]
    pub fn same_pattern(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/", self.inner.as_str())
    }
}
