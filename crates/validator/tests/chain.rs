//! End-to-end tests for the validation chain.

use std::sync::{Arc, Mutex};

use pretty_assertions::assert_eq;
use verity_validator::{
    Chain, ChainError, EqualityOptions, ErrorOverride, NullableOptions, Value, json, validate,
    validate_optional,
};

fn message(err: &ChainError) -> String {
    err.to_string()
}

#[tokio::test]
async fn required_rejects_null_by_default() {
    let err = validate(Value::null())
        .is_required(NullableOptions::default())
        .get()
        .await
        .unwrap_err();
    assert_eq!(message(&err), "Validation failed: value is required but was null");
}

#[tokio::test]
async fn required_accepts_null_when_allowed() {
    let value = validate(Value::null())
        .is_required(NullableOptions::nullable())
        .get()
        .await
        .unwrap();
    assert_eq!(value, Some(Value::null()));
}

#[tokio::test]
async fn named_chains_prefix_the_subject() {
    let err = validate_optional(None)
        .named("token")
        .is_required(NullableOptions::default())
        .get()
        .await
        .unwrap_err();
    assert_eq!(
        message(&err),
        "Validation failed for 'token': value is required but was absent"
    );
}

#[tokio::test]
async fn missing_assertions_cut_both_ways() {
    let ok = validate_optional(None)
        .is_missing(NullableOptions::default())
        .get()
        .await
        .unwrap();
    assert_eq!(ok, None);

    let err = validate(Value::integer(5))
        .is_missing(NullableOptions::default())
        .get()
        .await
        .unwrap_err();
    assert_eq!(message(&err), "Validation failed: value must be missing but was 5");
}

#[tokio::test]
async fn not_required_is_a_no_op() {
    let value = validate_optional(None).not_required().get().await.unwrap();
    assert_eq!(value, None);
}

#[tokio::test]
async fn deep_equality_accepts_rebuilt_structures() {
    let value = validate(Value::from(json!({"a": 1})))
        .is_equal(Value::from(json!({"a": 1})), EqualityOptions::deep())
        .get()
        .await
        .unwrap();
    assert_eq!(value, Some(Value::from(json!({"a": 1}))));
}

#[tokio::test]
async fn shallow_equality_rejects_rebuilt_structures() {
    let err = validate(Value::from(json!({"a": 1})))
        .is_equal(Value::from(json!({"a": 1})), EqualityOptions::shallow())
        .get()
        .await
        .unwrap_err();
    assert!(message(&err).starts_with("Validation failed: values are not equal:\n"));
}

#[tokio::test]
async fn equality_failures_carry_a_diff() {
    let err = validate(Value::integer(2))
        .is_equal(Value::integer(1), EqualityOptions::default())
        .get()
        .await
        .unwrap_err();
    assert_eq!(
        message(&err),
        "Validation failed: values are not equal:\n+ 2\n- 1"
    );
}

#[tokio::test]
async fn not_equal_accepts_different_values() {
    let value = validate(Value::text("a"))
        .not_equal(Value::text("b"), EqualityOptions::default())
        .get()
        .await
        .unwrap();
    assert_eq!(value, Some(Value::text("a")));

    let err = validate(Value::text("a"))
        .not_equal(Value::text("a"), EqualityOptions::default())
        .get()
        .await
        .unwrap_err();
    assert_eq!(message(&err), "Validation failed: value must not equal \"a\"");
}

#[tokio::test]
async fn membership_lists_each_candidate_diff() {
    let value = validate(Value::integer(2))
        .is_in([Value::integer(1), Value::integer(2)], EqualityOptions::default())
        .get()
        .await
        .unwrap();
    assert_eq!(value, Some(Value::integer(2)));

    let err = validate(Value::integer(3))
        .is_in([Value::integer(1), Value::integer(2)], EqualityOptions::default())
        .get()
        .await
        .unwrap_err();
    assert_eq!(
        message(&err),
        "Validation failed: value does not match any of the allowed values:\
         \n[0]\n+ 3\n- 1\n[1]\n+ 3\n- 2"
    );
}

#[tokio::test]
async fn exclusion_marks_the_matching_candidate() {
    let err = validate(Value::integer(2))
        .not_in([Value::integer(1), Value::integer(2)], EqualityOptions::default())
        .get()
        .await
        .unwrap_err();
    assert_eq!(
        message(&err),
        "Validation failed: value matches a forbidden value:\n   1\n-> 2"
    );
}

#[tokio::test]
async fn custom_steps_transform_the_value() {
    let value = validate(Value::integer(21))
        .custom(|value| async move {
            let n = value.and_then(|v| v.as_integer()).unwrap_or(0);
            Ok(Value::integer(n * 2))
        })
        .get()
        .await
        .unwrap();
    assert_eq!(value, Some(Value::integer(42)));
}

#[tokio::test]
async fn custom_rejections_surface_as_custom_errors() {
    let err = validate(Value::integer(1))
        .custom(|_| async { Err("rejected upstream".into()) })
        .get()
        .await
        .unwrap_err();
    assert!(matches!(err, ChainError::Custom(_)));
    assert_eq!(message(&err), "rejected upstream");
}

#[tokio::test]
async fn steps_run_strictly_in_order_across_awaits() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let slow = Arc::clone(&log);
    let fast = Arc::clone(&log);

    let value = validate(Value::integer(0))
        .custom(move |value| async move {
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
            slow.lock().unwrap().push("slow");
            Ok(value.unwrap_or(Value::null()))
        })
        .custom(move |value| async move {
            fast.lock().unwrap().push("fast");
            Ok(value.unwrap_or(Value::null()))
        })
        .get()
        .await
        .unwrap();

    assert_eq!(value, Some(Value::integer(0)));
    assert_eq!(*log.lock().unwrap(), vec!["slow", "fast"]);
}

#[tokio::test]
async fn no_step_runs_after_a_failure() {
    let ran = Arc::new(Mutex::new(false));
    let flag = Arc::clone(&ran);

    let err = validate(Value::integer(1))
        .is_equal(Value::integer(2), EqualityOptions::default())
        .custom(move |value| async move {
            *flag.lock().unwrap() = true;
            Ok(value.unwrap_or(Value::null()))
        })
        .get()
        .await
        .unwrap_err();

    assert!(matches!(err, ChainError::Validation(_)));
    assert!(!*ran.lock().unwrap());
}

#[tokio::test]
async fn required_failure_accepts_an_override() {
    let err = validate(Value::null())
        .is_required(NullableOptions::default())
        .with_error("custom")
        .get()
        .await
        .unwrap_err();
    assert_eq!(message(&err), "custom");
}

#[tokio::test]
async fn step_override_replaces_the_builtin_message() {
    let err = validate(Value::integer(1))
        .is_equal(Value::integer(2), EqualityOptions::default())
        .with_error("custom")
        .get()
        .await
        .unwrap_err();
    assert_eq!(message(&err), "custom");
}

#[tokio::test]
async fn pipeline_override_applies_when_a_step_has_none() {
    let err = validate(Value::integer(1))
        .or_error("global")
        .is_equal(Value::integer(2), EqualityOptions::default())
        .get()
        .await
        .unwrap_err();
    assert_eq!(message(&err), "global");
}

#[tokio::test]
async fn step_override_wins_over_the_pipeline_override() {
    let err = validate(Value::integer(1))
        .or_error("global")
        .is_equal(Value::integer(2), EqualityOptions::default())
        .with_error("step")
        .get()
        .await
        .unwrap_err();
    assert_eq!(message(&err), "step");
}

#[tokio::test]
async fn later_override_replaces_the_earlier_one_on_a_step() {
    let err = validate(Value::integer(1))
        .is_equal(Value::integer(2), EqualityOptions::default())
        .with_error("first")
        .with_error("second")
        .get()
        .await
        .unwrap_err();
    assert_eq!(message(&err), "second");
}

#[tokio::test]
async fn factory_overrides_see_the_current_value() {
    let err = validate(Value::integer(7))
        .is_equal(Value::integer(8), EqualityOptions::default())
        .with_error(ErrorOverride::with(|value| {
            let rendered = value.map_or_else(|| "absent".to_string(), Value::inspect);
            ErrorOverride::Message(format!("unexpected {rendered}"))
        }))
        .get()
        .await
        .unwrap_err();
    assert_eq!(message(&err), "unexpected 7");
}

#[tokio::test]
async fn prebuilt_error_overrides_pass_through_unwrapped() {
    let err = validate(Value::integer(1))
        .is_equal(Value::integer(2), EqualityOptions::default())
        .with_error(ErrorOverride::error(std::io::Error::other("wire broke")))
        .get()
        .await
        .unwrap_err();
    assert!(matches!(err, ChainError::Overridden(_)));
    assert_eq!(message(&err), "wire broke");
}

#[tokio::test]
async fn fallback_feeds_later_assertions() {
    let value = validate_optional(None)
        .set_fallback(Value::integer(4), NullableOptions::default())
        .is_equal(Value::integer(4), EqualityOptions::default())
        .get()
        .await
        .unwrap();
    assert_eq!(value, Some(Value::integer(4)));
}

#[tokio::test]
async fn chains_compose_assertions_and_transforms() {
    let value: Result<Option<Value>, ChainError> = validate(Value::from(json!([1, 2, 3])))
        .named("ids")
        .is_required(NullableOptions::default())
        .is_equal(Value::from(json!([1, 2, 3])), EqualityOptions::deep())
        .custom(|value| async move {
            let len = value.and_then(|v| v.as_array().map(verity_value::Array::len)).unwrap_or(0);
            Ok(Value::integer(len as i64))
        })
        .get()
        .await;
    assert_eq!(value.unwrap(), Some(Value::integer(3)));
}

#[test]
fn chains_are_send() {
    fn assert_send<T: Send>(_: T) {}
    assert_send(validate(Value::integer(1)));
    fn assert_future_send(c: Chain) {
        assert_send(c.get());
    }
    let _ = assert_future_send;
}
