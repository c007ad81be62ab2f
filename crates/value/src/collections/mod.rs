//! Composite value types
//!
//! All composites share storage via `Arc`: cloning a collection clones a
//! handle, and handle identity is what shallow equality sees.
//!
//! - [`Array`] — ordered sequence
//! - [`Set`] — unordered multiset
//! - [`Map`] — key/value pairs with arbitrary keys
//! - [`Object`] — string-keyed properties with an optional type name
//! - [`ErrorObject`] — caught-error values

mod array;
mod error;
mod map;
mod object;
mod set;

pub use array::Array;
pub use error::ErrorObject;
pub use map::Map;
pub use object::{Object, ObjectBuilder, Property};
pub use set::Set;
