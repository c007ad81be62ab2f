//! Value kind discriminant

use std::fmt;

/// The kind of a [`Value`](crate::Value).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Boolean,
    Integer,
    BigInt,
    Float,
    Text,
    Pattern,
    DateTime,
    Bytes,
    Function,
    Opaque,
    Array,
    Set,
    Map,
    Object,
    Error,
}

impl ValueKind {
    /// Human-readable kind name, as used in inspection headers.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Boolean => "Boolean",
            Self::Integer => "Integer",
            Self::BigInt => "BigInt",
            Self::Float => "Float",
            Self::Text => "Text",
            Self::Pattern => "Pattern",
            Self::DateTime => "DateTime",
            Self::Bytes => "Bytes",
            Self::Function => "Function",
            Self::Opaque => "Opaque",
            Self::Array => "Array",
            Self::Set => "Set",
            Self::Map => "Map",
            Self::Object => "Object",
            Self::Error => "Error",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
