//! Error types for value construction and property access

use thiserror::Error;

/// Errors raised while building or reading values.
#[derive(Debug, Clone, Error)]
pub enum ValueError {
    /// A pattern source failed to compile
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),

    /// A computed property read failed
    #[error("property read failed: {0}")]
    PropertyRead(String),
}

/// Result alias for value operations
pub type ValueResult<T> = Result<T, ValueError>;
