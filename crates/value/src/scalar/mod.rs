//! Scalar and handle types
//!
//! Wrapper types for the leaf variants of [`Value`](crate::Value):
//! - [`Float`] — f64 with bit-level identity
//! - [`Text`] — Arc-backed UTF-8 string
//! - [`Bytes`] — shared binary buffer
//! - [`Pattern`] — compiled regular expression
//! - [`Function`] — callable handle, identity-compared
//! - [`Opaque`] — handle with unknowable contents

mod bytes;
mod float;
mod function;
mod opaque;
mod pattern;
mod text;

pub use bytes::Bytes;
pub use float::Float;
pub use function::Function;
pub use opaque::Opaque;
pub use pattern::Pattern;
pub use text::Text;
