//! Core value machinery
//!
//! - [`value`] — the unified [`Value`](value::Value) enum
//! - [`kind`] — kind discriminant
//! - [`equal`] — identity and deep structural equality
//! - [`inspect`] — human-readable rendering
//! - [`convert`] — conversions from `serde_json`
//! - [`error`] — construction and property-read errors

pub mod convert;
pub mod equal;
pub mod error;
pub mod inspect;
pub mod kind;
pub mod value;

pub use equal::{EqualityOptions, equal, same_value};
pub use error::{ValueError, ValueResult};
pub use kind::ValueKind;
pub use value::Value;
