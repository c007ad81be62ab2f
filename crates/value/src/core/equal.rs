//! Deep structural equality engine
//!
//! Two layers:
//!
//! - [`same_value`] — identity. Borrow identity, value identity for
//!   primitives (floats at the bit level, so `NaN` is identical to itself
//!   and `+0.0` / `-0.0` are distinct), and storage identity for
//!   composites (clones share their `Arc` and are the same value).
//! - [`equal`] — the public predicate. Identity always short-circuits;
//!   with `deep` enabled, matching kinds are compared structurally.
//!   Set and map comparison is order-independent: primitive members by
//!   identity lookup, object-valued members by a greedy bipartite search
//!   over the unmatched pool.

use crate::collections::{Array, ErrorObject, Map, Object, Property, Set};
use crate::core::value::Value;

/// Options controlling the equality comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EqualityOptions {
    /// Compare nested structure recursively instead of by identity.
    pub deep: bool,
}

impl EqualityOptions {
    /// Structural comparison
    #[must_use]
    pub const fn deep() -> Self {
        Self { deep: true }
    }

    /// Identity-only comparison (the default)
    #[must_use]
    pub const fn shallow() -> Self {
        Self { deep: false }
    }
}

/// Identity comparison.
///
/// Returns true when `a` and `b` are the same borrow, the same primitive
/// value, or handles over the same shared storage.
#[must_use]
pub fn same_value(a: &Value, b: &Value) -> bool {
    if std::ptr::eq(a, b) {
        return true;
    }
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Boolean(x), Value::Boolean(y)) => x == y,
        (Value::Integer(x), Value::Integer(y)) => x == y,
        (Value::BigInt(x), Value::BigInt(y)) => x == y,
        (Value::Float(x), Value::Float(y)) => x.is_identical_to(y),
        (Value::Text(x), Value::Text(y)) => x == y,
        (Value::Pattern(x), Value::Pattern(y)) => x.same_pattern(y),
        (Value::Bytes(x), Value::Bytes(y)) => x.same_buffer(y),
        (Value::Function(x), Value::Function(y)) => x.same_function(y),
        (Value::Opaque(x), Value::Opaque(y)) => x.same_handle(y),
        (Value::Array(x), Value::Array(y)) => x.same_storage(y),
        (Value::Set(x), Value::Set(y)) => x.same_storage(y),
        (Value::Map(x), Value::Map(y)) => x.same_storage(y),
        (Value::Object(x), Value::Object(y)) => x.same_storage(y),
        (Value::Error(x), Value::Error(y)) => x.same_storage(y),
        // DateTime is a plain value type: a copy is a new object.
        _ => false,
    }
}

/// Equality predicate over two values.
///
/// Identity satisfies the comparison regardless of `deep`. Without
/// `deep`, nothing else does. With `deep`, values of the same kind are
/// compared structurally; opaque handles and functions only ever compare
/// by identity.
#[must_use]
pub fn equal(a: &Value, b: &Value, options: EqualityOptions) -> bool {
    if same_value(a, b) {
        return true;
    }
    if !options.deep {
        return false;
    }
    match (a, b) {
        (Value::Opaque(_), _) | (_, Value::Opaque(_)) => false,
        (Value::Function(_), _) | (_, Value::Function(_)) => false,
        (Value::Pattern(x), Value::Pattern(y)) => x.as_str() == y.as_str(),
        (Value::DateTime(x), Value::DateTime(y)) => x == y,
        (Value::Bytes(x), Value::Bytes(y)) => x.as_slice() == y.as_slice(),
        (Value::Array(x), Value::Array(y)) => arrays_equal(x, y, options),
        (Value::Set(x), Value::Set(y)) => sets_equal(x, y, options),
        (Value::Map(x), Value::Map(y)) => maps_equal(x, y, options),
        (Value::Object(x), Value::Object(y)) => objects_equal(x, y, options),
        (Value::Error(x), Value::Error(y)) => errors_equal(x, y, options),
        // Kind mismatch, or primitives already rejected by identity.
        _ => false,
    }
}

fn arrays_equal(a: &Array, b: &Array, options: EqualityOptions) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b.iter()).all(|(x, y)| equal(x, y, options))
}

fn sets_equal(a: &Set, b: &Set, options: EqualityOptions) -> bool {
    if a.len() != b.len() {
        return false;
    }

    // Primitive members (and identity-only handles) must be present in
    // the other set; object-valued members are matched greedily below.
    let mut object_members: Vec<&Value> = Vec::new();
    for member in a.iter() {
        if member.is_object_like() {
            object_members.push(member);
        } else if !b.iter().any(|other| same_value(member, other)) {
            return false;
        }
    }
    if object_members.is_empty() {
        return true;
    }

    let mut pool: Vec<&Value> = b.iter().filter(|v| v.is_object_like()).collect();
    for member in object_members {
        let Some(found) = pool.iter().position(|candidate| equal(member, candidate, options))
        else {
            return false;
        };
        pool.swap_remove(found);
    }
    true
}

fn maps_equal(a: &Map, b: &Map, options: EqualityOptions) -> bool {
    if a.len() != b.len() {
        return false;
    }

    // Primitive keys look up directly; object-valued keys go through the
    // greedy (key, value) pair search.
    let mut object_entries: Vec<(&Value, &Value)> = Vec::new();
    for (key, value) in a.iter() {
        if key.is_object_like() {
            object_entries.push((key, value));
            continue;
        }
        match b.iter().find(|(other_key, _)| same_value(key, other_key)) {
            None => return false,
            Some((_, other_value)) => {
                if !equal(value, other_value, options) {
                    return false;
                }
            }
        }
    }
    if object_entries.is_empty() {
        return true;
    }

    let mut pool: Vec<(&Value, &Value)> = b
        .iter()
        .filter(|(key, _)| key.is_object_like())
        .map(|(key, value)| (key, value))
        .collect();
    for (key, value) in object_entries {
        let Some(found) = pool
            .iter()
            .position(|(ck, cv)| equal(key, ck, options) && equal(value, cv, options))
        else {
            return false;
        };
        pool.swap_remove(found);
    }
    true
}

fn objects_equal(a: &Object, b: &Object, options: EqualityOptions) -> bool {
    // Type-name mismatch is the prototype check: same shape, different
    // class, not equal.
    if a.type_name() != b.type_name() {
        return false;
    }
    if a.len() != b.len() {
        return false;
    }
    a.entries().all(|(key, property)| {
        let left = property.read();
        let right = b.get(key).and_then(Property::read);
        reads_equal(left, right, options)
    })
}

fn errors_equal(a: &ErrorObject, b: &ErrorObject, options: EqualityOptions) -> bool {
    if a.name() != b.name() || a.message() != b.message() {
        return false;
    }
    if a.len() != b.len() {
        return false;
    }
    a.properties().filter(|(key, _)| key.as_str() != "stack").all(|(key, property)| {
        let left = property.read();
        let right = b.get(key).and_then(Property::read);
        reads_equal(left, right, options)
    })
}

/// Compare two safe property reads. A failed or missing read (`None`)
/// only matches another failed or missing read.
fn reads_equal(a: Option<Value>, b: Option<Value>, options: EqualityOptions) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(x), Some(y)) => equal(&x, &y, options),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::collections::Object;
    use crate::core::error::ValueError;
    use crate::scalar::{Opaque, Pattern};

    fn deep() -> EqualityOptions {
        EqualityOptions::deep()
    }

    #[test]
    fn identity_satisfies_both_modes() {
        let v = Value::array([Value::float(f64::NAN)]);
        assert!(equal(&v, &v, EqualityOptions::shallow()));
        assert!(equal(&v, &v, deep()));
        // clones share storage
        let w = v.clone();
        assert!(equal(&v, &w, EqualityOptions::shallow()));
    }

    #[test]
    fn shallow_never_matches_rebuilt_composites() {
        let a = Value::object([("a", Value::integer(1))]);
        let b = Value::object([("a", Value::integer(1))]);
        assert!(!equal(&a, &b, EqualityOptions::shallow()));
        assert!(equal(&a, &b, deep()));
    }

    #[test]
    fn float_identity_semantics() {
        assert!(equal(
            &Value::float(f64::NAN),
            &Value::float(f64::NAN),
            EqualityOptions::shallow()
        ));
        assert!(!equal(
            &Value::float(0.0),
            &Value::float(-0.0),
            EqualityOptions::shallow()
        ));
    }

    #[test]
    fn kind_mismatch_is_never_equal() {
        assert!(!equal(&Value::integer(1), &Value::float(1.0), deep()));
        assert!(!equal(&Value::array([]), &Value::set([]), deep()));
    }

    #[test]
    fn patterns_compare_by_source_form() {
        let a = Value::Pattern(Pattern::new("^a+$").unwrap());
        let b = Value::Pattern(Pattern::new("^a+$").unwrap());
        let c = Value::Pattern(Pattern::new("^b+$").unwrap());
        assert!(equal(&a, &b, deep()));
        assert!(!equal(&a, &b, EqualityOptions::shallow()));
        assert!(!equal(&a, &c, deep()));
    }

    #[test]
    fn datetimes_compare_by_instant() {
        use chrono::{TimeZone, Utc};
        let a = Value::datetime(Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap());
        let b = Value::datetime(Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap());
        let c = Value::datetime(Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 6).unwrap());
        assert!(equal(&a, &b, deep()));
        // a copied instant is a new object, not the same value
        assert!(!equal(&a, &b, EqualityOptions::shallow()));
        assert!(!equal(&a, &c, deep()));
    }

    #[test]
    fn bytes_compare_byte_for_byte() {
        let a = Value::bytes(vec![1, 2, 3]);
        let b = Value::bytes(vec![1, 2, 3]);
        let c = Value::bytes(vec![1, 2, 4]);
        assert!(equal(&a, &b, deep()));
        assert!(!equal(&a, &c, deep()));
    }

    #[test]
    fn rebuilt_empty_bytes_are_distinct_in_shallow_mode() {
        // empty buffers share a static allocation inside `bytes`, but
        // they are still two values, not one
        let a = Value::bytes(Vec::new());
        let b = Value::bytes(Vec::new());
        assert!(!equal(&a, &b, EqualityOptions::shallow()));
        assert!(equal(&a, &b, deep()));
    }

    #[test]
    fn set_equality_is_order_independent() {
        let a = Value::set([Value::integer(1), Value::integer(2), Value::integer(3)]);
        let b = Value::set([Value::integer(3), Value::integer(2), Value::integer(1)]);
        assert!(equal(&a, &b, deep()));
    }

    #[test]
    fn set_matches_object_members_greedily() {
        let a = Value::set([
            Value::object([("x", Value::integer(1))]),
            Value::object([("x", Value::integer(2))]),
        ]);
        let b = Value::set([
            Value::object([("x", Value::integer(2))]),
            Value::object([("x", Value::integer(1))]),
        ]);
        assert!(equal(&a, &b, deep()));

        let c = Value::set([
            Value::object([("x", Value::integer(1))]),
            Value::object([("x", Value::integer(1))]),
        ]);
        assert!(!equal(&a, &c, deep()));
    }

    #[test]
    fn map_equality_with_primitive_and_object_keys() {
        let a = Value::map([
            (Value::text("k"), Value::integer(1)),
            (Value::object([("id", Value::integer(7))]), Value::text("v")),
        ]);
        let b = Value::map([
            (Value::object([("id", Value::integer(7))]), Value::text("v")),
            (Value::text("k"), Value::integer(1)),
        ]);
        assert!(equal(&a, &b, deep()));

        let c = Value::map([
            (Value::text("k"), Value::integer(2)),
            (Value::object([("id", Value::integer(7))]), Value::text("v")),
        ]);
        assert!(!equal(&a, &c, deep()));
    }

    #[test]
    fn object_type_name_acts_as_prototype() {
        let plain = Value::object([("a", Value::integer(1))]);
        let typed = Value::Object(
            Object::builder()
                .type_name("User")
                .property("a", Value::integer(1))
                .build(),
        );
        assert!(!equal(&plain, &typed, deep()));
    }

    #[test]
    fn failed_reads_match_each_other_only() {
        let a = Value::Object(
            Object::builder()
                .computed("x", || Err(ValueError::PropertyRead("a".into())))
                .build(),
        );
        let b = Value::Object(
            Object::builder()
                .computed("x", || Err(ValueError::PropertyRead("b".into())))
                .build(),
        );
        let c = Value::object([("x", Value::integer(1))]);
        assert!(equal(&a, &b, deep()));
        assert!(!equal(&a, &c, deep()));
    }

    #[test]
    fn error_objects_require_exact_name_and_message() {
        let a = Value::Error(crate::collections::ErrorObject::new("E", "boom"));
        let b = Value::Error(crate::collections::ErrorObject::new("E", "boom"));
        let c = Value::Error(crate::collections::ErrorObject::new("E", "bang"));
        assert!(equal(&a, &b, deep()));
        assert!(!equal(&a, &c, deep()));
    }

    #[test]
    fn opaques_never_compare_structurally() {
        let a = Value::Opaque(Opaque::new("Store"));
        let b = Value::Opaque(Opaque::new("Store"));
        assert!(!equal(&a, &b, deep()));
        let same = a.clone();
        assert!(equal(&a, &same, deep()));
    }

    #[test]
    fn symmetry_spot_checks() {
        let pairs = [
            (Value::integer(1), Value::integer(1)),
            (Value::integer(1), Value::float(1.0)),
            (
                Value::array([Value::integer(1)]),
                Value::array([Value::integer(1)]),
            ),
            (Value::set([Value::text("a")]), Value::set([Value::text("a")])),
        ];
        for (a, b) in &pairs {
            for options in [EqualityOptions::shallow(), deep()] {
                assert_eq!(equal(a, b, options), equal(b, a, options));
            }
        }
    }
}
