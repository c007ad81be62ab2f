//! # Verity Value
//!
//! Value model and comparison engine for runtime validation:
//!
//! - **[`Value`]** — unified type covering scalars, composites, and
//!   opaque handles, with shared-storage clones
//! - **[`equal`]** — identity and deep structural equality, including
//!   order-independent set and map comparison
//! - **[`Value::inspect`]** — deterministic human-readable rendering
//! - **[`diff::diff`]** — LCS line diff for expected vs actual output
//!
//! ## Example
//!
//! ```rust
//! use verity_value::{EqualityOptions, Value, equal};
//!
//! let a = Value::object([("n", Value::integer(1))]);
//! let b = Value::object([("n", Value::integer(1))]);
//! assert!(equal(&a, &b, EqualityOptions::deep()));
//! assert!(!equal(&a, &b, EqualityOptions::shallow()));
//! ```

pub mod collections;
pub mod core;
pub mod diff;
pub mod scalar;

// Re-export core types (self:: disambiguates from the core crate)
pub use self::core::{
    EqualityOptions, Value, ValueError, ValueKind, ValueResult, equal, same_value,
};
// Re-export scalar and collection types
pub use collections::{Array, ErrorObject, Map, Object, ObjectBuilder, Property, Set};
pub use scalar::{Bytes, Float, Function, Opaque, Pattern, Text};

// Re-export serde_json::json! macro for convenience in tests and call sites
pub use serde_json::json;

/// Prelude for common imports
pub mod prelude {
    pub use crate::diff::diff;
    pub use crate::{EqualityOptions, Value, ValueKind, ValueResult, equal, same_value};
    pub use crate::{Array, ErrorObject, Map, Object, Property, Set};
    pub use crate::{Bytes, Float, Function, Opaque, Pattern, Text};
    pub use serde_json::json;
}
