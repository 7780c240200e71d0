use arg_rail::prelude::*;
use arg_rail::{begin_with, RailConfig, TraceCapture, TraceStatus};
use std::error::Error;

fn failing_pair() -> ValidationError {
    begin_with(RailConfig::without_trace())
        .check_not_null(None::<&str>, "email")
        .and_then(|v| v.check_within_range(200, "age", 0, 130))
        .unwrap()
        .finish()
        .unwrap_err()
}

#[test]
fn test_single_failure_is_exposed_directly() {
    let err = begin().check_not_null(None::<&str>, "email").unwrap().finish().unwrap_err();

    assert!(matches!(err.cause(), Cause::Single(failure) if failure.name() == "email"));
    assert_eq!(err.len(), 1);
    assert!(!err.is_empty());
    assert_eq!(err.header(), "validation failed");
    assert_eq!(err.to_string(), "validation failed: email is null; a value must be provided");
}

#[test]
fn test_single_failure_is_the_source() {
    let err = begin().check_true(false, "accepted").unwrap().finish().unwrap_err();

    let source = err.source().unwrap();
    assert_eq!(source.to_string(), "accepted must be true, but was false");
    assert!(source.downcast_ref::<Failure>().is_some());
}

#[test]
fn test_multiple_failures_form_a_composite() {
    let err = failing_pair();

    match err.cause() {
        Cause::Multiple(failures) => assert_eq!(failures.len(), 2),
        Cause::Single(_) => panic!("expected a composite"),
    }
    assert!(err.single().is_none());
    assert!(err.source().is_none());
    assert_eq!(err.header(), "multiple validation issues occurred");
}

#[test]
fn test_multiple_failures_message() {
    let err = failing_pair();

    assert_eq!(
        err.message(),
        "multiple validation issues occurred\n  \
         [0] NullArgument: email is null; a value must be provided\n  \
         [1] OutOfRange: age's value of \"200\" is out of range; must be a value from \"0\" to \"130\""
    );
}

#[test]
fn test_repeated_finish_reports_everything_again() {
    let validation = begin().check_numeric(Some("n/a"), "threshold").unwrap();

    let first = validation.finish().unwrap_err();
    validation.record(Failure::null("late"));
    let second = validation.finish().unwrap_err();

    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 2);
    assert_eq!(second.failures()[0], first.failures()[0]);
}

#[test]
fn test_new_returns_none_without_failures() {
    assert!(ValidationError::new(Vec::new(), &RailConfig::default()).is_none());
    assert!(ValidationError::new(vec![Failure::null("x")], &RailConfig::default()).is_some());
}

#[test]
fn test_error_is_not_unobserved_when_finished() {
    assert!(!failing_pair().is_unobserved());
}

#[test]
fn test_into_failures_and_iteration() {
    let err = failing_pair();

    let names: Vec<_> = (&err).into_iter().map(Failure::name).collect();
    assert_eq!(names, vec!["email", "age"]);
    assert_eq!(err.into_failures().len(), 2);
}

#[test]
fn test_disabled_trace_is_not_rendered() {
    let err = failing_pair();

    assert_eq!(err.trace().status(), TraceStatus::Disabled);
    assert!(!err.formatter().show_trace(true).to_string().contains("stack trace"));
}

#[test]
fn test_default_trace_follows_backtrace_environment() {
    assert_eq!(RailConfig::default().trace, TraceCapture::Env);

    let enabled = match std::env::var("RUST_LIB_BACKTRACE") {
        Ok(value) => value != "0",
        Err(_) => std::env::var("RUST_BACKTRACE").is_ok_and(|value| value != "0"),
    };
    let err = begin().check_true(false, "accepted").unwrap().finish().unwrap_err();

    let expected = if enabled { TraceStatus::Captured } else { TraceStatus::Disabled };
    assert_eq!(err.trace().status(), expected);
}

#[test]
fn test_forced_trace_starts_at_the_caller() {
    let err = begin_with(RailConfig::forced_trace())
        .check_true(false, "accepted")
        .unwrap()
        .finish()
        .unwrap_err();

    let trace = err.trace();
    assert_eq!(trace.status(), TraceStatus::Captured);
    assert!(trace.frames().iter().all(|frame| !frame.symbol().starts_with("arg_rail::")));

    let first = trace.frames().first().expect("caller frame");
    assert!(first.symbol().contains("test_forced_trace_starts_at_the_caller"), "{}", first.symbol());
}

#[test]
fn test_extra_hidden_frames_are_elided() {
    fn helper(validation: Validation) -> ValidationError {
        validation.check_true(false, "accepted").unwrap().finish().unwrap_err()
    }

    let config = RailConfig::forced_trace().hide_frames("test_extra_hidden_frames_are_elided::helper");
    let err = helper(begin_with(config));

    assert!(err.trace().frames().iter().all(|frame| !frame.symbol().contains("::helper")));
}

#[test]
fn test_shared_across_threads() {
    fn assert_send_sync<T: Send + Sync + 'static>() {}
    assert_send_sync::<ValidationError>();
    assert_send_sync::<Validation>();
}

#[cfg(feature = "serde")]
#[test]
fn test_validation_error_serde_round_trip() {
    let err = failing_pair();

    let json = serde_json::to_string(&err).unwrap();
    let back: ValidationError = serde_json::from_str(&json).unwrap();

    assert_eq!(back, err);
    assert_eq!(back.to_string(), err.to_string());
}
