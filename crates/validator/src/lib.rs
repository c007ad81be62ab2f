//! # Verity Validator
//!
//! Deferred validation chains over [`verity_value`]:
//!
//! - **[`validate`] / [`validate_optional`]** — start a chain over a
//!   value (absent values arrive as `None`)
//! - **[`Chain`]** — accumulates assertion and transform steps; nothing
//!   runs until [`Chain::get`] executes them strictly in order
//! - **[`ErrorOverride`]** — replace a step's failure with a message, a
//!   pre-built error, or a lazy factory
//!
//! ## Example
//!
//! ```rust
//! use verity_validator::{EqualityOptions, Value, validate};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let port = validate(Value::integer(8080))
//!     .named("port")
//!     .is_in([Value::integer(8080), Value::integer(8443)], EqualityOptions::default())
//!     .get()
//!     .await
//!     .unwrap();
//! assert_eq!(port, Some(Value::integer(8080)));
//! # }
//! ```

pub mod chain;
pub mod error;
pub mod options;
mod step;

// Re-export the chain surface
pub use chain::{Chain, validate, validate_optional};
pub use error::{BoxError, ChainError, ErrorOverride, ValidationError};
pub use options::NullableOptions;

// Re-export the value model used at every boundary
pub use verity_value::{EqualityOptions, Value, equal, json};
