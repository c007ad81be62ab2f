//! Conversions from `serde_json` values
//!
//! JSON is the convenient literal syntax in tests and at API edges, so
//! the mapping is lossless where it can be: whole numbers become
//! integers, everything else a float.

use crate::core::value::Value;

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Boolean(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Integer(i),
                None => Self::float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Self::text(s),
            serde_json::Value::Array(items) => Self::array(items.into_iter().map(Self::from)),
            serde_json::Value::Object(entries) => {
                Self::object(entries.into_iter().map(|(k, v)| (k, Self::from(v))))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn whole_numbers_become_integers() {
        assert_eq!(Value::from(json!(42)), Value::integer(42));
        assert_eq!(Value::from(json!(1.5)), Value::float(1.5));
    }

    #[test]
    fn nested_structures_convert_recursively() {
        let v = Value::from(json!({"name": "a", "tags": [1, 2]}));
        let expected = Value::object([
            ("name", Value::text("a")),
            ("tags", Value::array([Value::integer(1), Value::integer(2)])),
        ]);
        assert_eq!(v, expected);
    }

    #[test]
    fn null_and_booleans() {
        assert_eq!(Value::from(json!(null)), Value::null());
        assert_eq!(Value::from(json!(true)), Value::boolean(true));
    }
}
