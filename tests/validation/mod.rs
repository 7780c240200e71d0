use arg_rail::prelude::*;

mod concurrency;

#[test]
fn test_begin_returns_empty_unfinished_chain() {
    let validation = begin();

    assert!(validation.is_empty());
    assert_eq!(validation.len(), 0);
    assert!(!validation.is_finished());
    assert!(validation.finish().is_ok());
}

#[test]
fn test_independent_failures_reported_together_in_check_order() {
    let err = begin()
        .check_not_null(None::<u64>, "id")
        .and_then(|v| v.check_not_null_or_empty(Some(""), "name"))
        .and_then(|v| v.check_within_range(-1, "age", 0, 130))
        .and_then(|v| v.check_numeric(Some("abc"), "zip"))
        .and_then(|v| v.check_true(false, "accepted"))
        .and_then(|v| v.check_false(true, "banned"))
        .unwrap()
        .finish()
        .unwrap_err();

    let kinds: Vec<_> = err.iter().map(Failure::kind).collect();
    assert_eq!(
        kinds,
        vec![
            FailureKind::NullArgument,
            FailureKind::EmptyArgument,
            FailureKind::OutOfRange,
            FailureKind::NotNumeric,
            FailureKind::BooleanMismatch,
            FailureKind::BooleanMismatch,
        ]
    );
    let names: Vec<_> = err.iter().map(Failure::name).collect();
    assert_eq!(names, vec!["id", "name", "age", "zip", "accepted", "banned"]);
}

#[test]
fn test_passing_chain_finishes_cleanly() {
    let result = begin()
        .check_not_null(Some(&"value"), "value")
        .and_then(|v| v.check_not_null_or_empty(Some("value"), "value"))
        .and_then(|v| v.check_within_range(5, "value", 0, 10))
        .and_then(|v| v.check_numeric(Some("1000"), "value"))
        .and_then(|v| v.check_true(true, "value"))
        .and_then(|v| v.check_false(false, "value"))
        .unwrap()
        .finish();

    assert!(result.is_ok());
}
