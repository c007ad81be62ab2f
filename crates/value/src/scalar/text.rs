//! Text (UTF-8 string) type
//!
//! Uses `Arc<str>` internally for cheap cloning; clones share storage.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// UTF-8 text string with efficient cloning.
#[derive(Debug, Clone)]
pub struct Text {
    inner: Arc<str>,
}

impl Text {
    /// Create a new Text from a String (takes ownership)
    pub fn new(s: impl Into<String>) -> Self {
        Self {
            inner: Arc::from(s.into().into_boxed_str()),
        }
    }

    /// Get the string as &str
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
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
}

impl Deref for Text {
    type Target = str;

    fn deref(&self) -> &str {
        &self.inner
    }
}

impl PartialEq for Text {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl Eq for Text {}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Text {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compares_by_value() {
        assert_eq!(Text::new("hello"), Text::from("hello"));
        assert_ne!(Text::new("hello"), Text::new("world"));
    }

    #[test]
    fn clones_share_storage() {
        let a = Text::new("shared");
        let b = a.clone();
        assert!(std::ptr::eq(a.as_str(), b.as_str()));
    }
}
