//! Unified Value enum that combines all scalar and composite types
//!
//! This is the central type: anything the validation chain can hold is a
//! `Value`.

use chrono::{DateTime, Utc};

use crate::collections::{Array, ErrorObject, Map, Object, Set};
use crate::core::equal::{EqualityOptions, equal};
use crate::core::kind::ValueKind;
use crate::scalar::{Bytes, Float, Function, Opaque, Pattern, Text};

/// Unified value type.
///
/// Combines scalar types (booleans, numbers, text, bytes, patterns,
/// datetimes) with composites (arrays, sets, maps, objects, error
/// objects) and handles (functions, opaques).
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// Null value
    #[default]
    Null,

    /// Boolean value
    Boolean(bool),

    /// Integer number (i64)
    Integer(i64),

    /// Large integer (i128), rendered with a trailing `n` marker
    BigInt(i128),

    /// Floating point number (f64)
    Float(Float),

    /// UTF-8 text string
    Text(Text),

    /// Compiled regular expression
    Pattern(Pattern),

    /// Point in time (UTC)
    DateTime(DateTime<Utc>),

    /// Binary data
    Bytes(Bytes),

    /// Callable handle, identity-compared
    Function(Function),

    /// Handle whose contents cannot be enumerated
    Opaque(Opaque),

    /// Ordered sequence of values
    Array(Array),

    /// Unordered multiset of values
    Set(Set),

    /// Key/value map with arbitrary keys
    Map(Map),

    /// String-keyed properties with an optional type name
    Object(Object),

    /// Caught-error value
    Error(ErrorObject),
}

impl Value {
    // ==================== Constructors ====================

    /// Create a null value
    pub const fn null() -> Self {
        Self::Null
    }

    /// Create a boolean value
    pub const fn boolean(v: bool) -> Self {
        Self::Boolean(v)
    }

    /// Create an integer value
    pub const fn integer(v: i64) -> Self {
        Self::Integer(v)
    }

    /// Create a big integer value
    pub const fn bigint(v: i128) -> Self {
        Self::BigInt(v)
    }

    /// Create a float value
    pub const fn float(v: f64) -> Self {
        Self::Float(Float::new(v))
    }

    /// Create a text value from String or &str
    pub fn text(v: impl Into<String>) -> Self {
        Self::Text(Text::new(v))
    }

    /// Create a bytes value
    pub fn bytes(v: Vec<u8>) -> Self {
        Self::Bytes(Bytes::new(v))
    }

    /// Create a datetime value
    pub const fn datetime(v: DateTime<Utc>) -> Self {
        Self::DateTime(v)
    }

    /// Create an array value
    pub fn array(items: impl IntoIterator<Item = Value>) -> Self {
        Self::Array(items.into_iter().collect())
    }

    /// Create a set value
    pub fn set(members: impl IntoIterator<Item = Value>) -> Self {
        Self::Set(members.into_iter().collect())
    }

    /// Create a map value
    pub fn map(entries: impl IntoIterator<Item = (Value, Value)>) -> Self {
        Self::Map(entries.into_iter().collect())
    }

    /// Create an object value from plain properties
    pub fn object<K: Into<String>>(properties: impl IntoIterator<Item = (K, Value)>) -> Self {
        Self::Object(properties.into_iter().collect())
    }

    // ==================== Type queries ====================

    /// Get the kind of this value
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Integer(_) => ValueKind::Integer,
            Self::BigInt(_) => ValueKind::BigInt,
            Self::Float(_) => ValueKind::Float,
            Self::Text(_) => ValueKind::Text,
            Self::Pattern(_) => ValueKind::Pattern,
            Self::DateTime(_) => ValueKind::DateTime,
            Self::Bytes(_) => ValueKind::Bytes,
            Self::Function(_) => ValueKind::Function,
            Self::Opaque(_) => ValueKind::Opaque,
            Self::Array(_) => ValueKind::Array,
            Self::Set(_) => ValueKind::Set,
            Self::Map(_) => ValueKind::Map,
            Self::Object(_) => ValueKind::Object,
            Self::Error(_) => ValueKind::Error,
        }
    }

    /// Check if this is null
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Check if this is a scalar compared by value (null, boolean,
    /// integer, big integer, float, or text).
    #[inline]
    #[must_use]
    pub const fn is_primitive(&self) -> bool {
        matches!(
            self,
            Self::Null
                | Self::Boolean(_)
                | Self::Integer(_)
                | Self::BigInt(_)
                | Self::Float(_)
                | Self::Text(_)
        )
    }

    /// Check if this is an object-like value: one that participates in
    /// structural comparison. Functions and primitives are not
    /// object-like; opaques are (they occupy the object side of set and
    /// map matching even though their contents never compare equal).
    #[inline]
    #[must_use]
    pub const fn is_object_like(&self) -> bool {
        matches!(
            self,
            Self::Pattern(_)
                | Self::DateTime(_)
                | Self::Bytes(_)
                | Self::Opaque(_)
                | Self::Array(_)
                | Self::Set(_)
                | Self::Map(_)
                | Self::Object(_)
                | Self::Error(_)
        )
    }

    // ==================== Accessors ====================

    /// Try to get as boolean
    #[inline]
    #[must_use]
    pub const fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as integer
    #[inline]
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get as float
    #[inline]
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(f.value()),
            _ => None,
        }
    }

    /// Try to get as string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(t) => Some(t.as_str()),
            _ => None,
        }
    }

    /// Try to get as array reference
    #[inline]
    #[must_use]
    pub const fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Try to get as object reference
    #[inline]
    #[must_use]
    pub const fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }
}

/// Deep structural equality.
///
/// Delegates to [`equal`] with `deep` enabled so assertions over values
/// read naturally; note that this makes `NaN` equal to itself, matching
/// the engine's identity semantics rather than IEEE-754. Use [`equal`]
/// directly for shallow (identity) comparison.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        equal(self, other, EqualityOptions::deep())
    }
}

impl Eq for Value {}

// ==================== From implementations ====================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Integer(i64::from(v))
    }
}

impl From<i128> for Value {
    fn from(v: i128) -> Self {
        Self::BigInt(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::text(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::text(v)
    }
}

impl From<Text> for Value {
    fn from(v: Text) -> Self {
        Self::Text(v)
    }
}

impl From<Float> for Value {
    fn from(v: Float) -> Self {
        Self::Float(v)
    }
}

impl From<Bytes> for Value {
    fn from(v: Bytes) -> Self {
        Self::Bytes(v)
    }
}

impl From<Pattern> for Value {
    fn from(v: Pattern) -> Self {
        Self::Pattern(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Self::DateTime(v)
    }
}

impl From<Function> for Value {
    fn from(v: Function) -> Self {
        Self::Function(v)
    }
}

impl From<Opaque> for Value {
    fn from(v: Opaque) -> Self {
        Self::Opaque(v)
    }
}

impl From<Array> for Value {
    fn from(v: Array) -> Self {
        Self::Array(v)
    }
}

impl From<Set> for Value {
    fn from(v: Set) -> Self {
        Self::Set(v)
    }
}

impl From<Map> for Value {
    fn from(v: Map) -> Self {
        Self::Map(v)
    }
}

impl From<Object> for Value {
    fn from(v: Object) -> Self {
        Self::Object(v)
    }
}

impl From<ErrorObject> for Value {
    fn from(v: ErrorObject) -> Self {
        Self::Error(v)
    }
}
