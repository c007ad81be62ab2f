//! Object (string-keyed properties) type
//!
//! An object carries an optional type name (its "class") and an
//! insertion-ordered property map. A property is either a plain value or
//! a computed read that may fail; [`Property::read`] is the safe accessor
//! that never propagates the fault.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::core::error::ValueResult;
use crate::core::value::Value;

type Getter = dyn Fn() -> ValueResult<Value> + Send + Sync;

/// One object property: a stored value or a fallible computed read.
#[derive(Clone)]
pub enum Property {
    /// A plain stored value
    Value(Value),
    /// A computed read that may fail
    Computed(Arc<Getter>),
}

impl Property {
    /// Wrap a plain value
    pub fn value(value: impl Into<Value>) -> Self {
        Self::Value(value.into())
    }

    /// Wrap a computed read
    pub fn computed(getter: impl Fn() -> ValueResult<Value> + Send + Sync + 'static) -> Self {
        Self::Computed(Arc::new(getter))
    }

    /// Safe access: the property value, or `None` when the read fails.
    #[must_use]
    pub fn read(&self) -> Option<Value> {
        match self {
            Self::Value(v) => Some(v.clone()),
            Self::Computed(getter) => match getter() {
                Ok(v) => Some(v),
                Err(error) => {
                    tracing::debug!(%error, "computed property read failed");
                    None
                }
            },
        }
    }
}

impl fmt::Debug for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

#[derive(Debug)]
struct ObjectInner {
    type_name: Option<String>,
    properties: IndexMap<String, Property>,
}

/// String-keyed property bag with an optional type name.
#[derive(Debug, Clone)]
pub struct Object {
    inner: Arc<ObjectInner>,
}

impl Object {
    /// Create an empty object
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Start building an object
    #[must_use]
    pub fn builder() -> ObjectBuilder {
        ObjectBuilder::default()
    }

    /// Get the type name, defaulting to `Object`
    #[inline]
    #[must_use]
    pub fn type_name(&self) -> &str {
        self.inner.type_name.as_deref().unwrap_or("Object")
    }

    /// Get the number of properties
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.properties.len()
    }

    /// Check if empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.properties.is_empty()
    }

    /// Get a property by key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Property> {
        self.inner.properties.get(key)
    }

    /// Check if a key exists
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.properties.contains_key(key)
    }

    /// Iterate over `(key, property)` entries in insertion order
    pub fn entries(&self) -> indexmap::map::Iter<'_, String, Property> {
        self.inner.properties.iter()
    }

    /// Property keys sorted lexicographically (rendering order)
    #[must_use]
    pub fn sorted_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.inner.properties.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Check if `other` shares this object's storage.
    #[must_use]
    pub fn same_storage(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Default for Object {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut builder = Self::builder();
        for (key, value) in iter {
            builder = builder.property(key, value);
        }
        builder.build()
    }
}

/// Builder for [`Object`]
#[derive(Default)]
pub struct ObjectBuilder {
    type_name: Option<String>,
    properties: IndexMap<String, Property>,
}

impl ObjectBuilder {
    /// Set the type name (the object's "class")
    #[must_use]
    pub fn type_name(mut self, name: impl Into<String>) -> Self {
        self.type_name = Some(name.into());
        self
    }

    /// Add a plain property
    #[must_use]
    pub fn property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), Property::value(value));
        self
    }

    /// Add a computed property
    #[must_use]
    pub fn computed(
        mut self,
        key: impl Into<String>,
        getter: impl Fn() -> ValueResult<Value> + Send + Sync + 'static,
    ) -> Self {
        self.properties.insert(key.into(), Property::computed(getter));
        self
    }

    /// Finish building
    #[must_use]
    pub fn build(self) -> Object {
        Object {
            inner: Arc::new(ObjectInner {
                type_name: self.type_name,
                properties: self.properties,
            }),
        }
    }
}
