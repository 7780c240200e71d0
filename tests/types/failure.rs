use arg_rail::{Failure, FailureKind};
use std::collections::HashSet;

#[test]
fn test_constructors_render_messages() {
    assert_eq!(Failure::null("user_id").message(), "user_id is null; a value must be provided");
    assert_eq!(Failure::empty("title").message(), "title is empty; a value must be provided");
    assert_eq!(
        Failure::out_of_range("age", &200, &0, &130).message(),
        "age's value of \"200\" is out of range; must be a value from \"0\" to \"130\""
    );
    assert_eq!(
        Failure::not_numeric("zip", "9x").message(),
        "zip must be a numeric string; actual value is \"9x\""
    );
    assert_eq!(
        Failure::boolean_mismatch("enabled", true, false).message(),
        "enabled must be true, but was false"
    );
}

#[test]
fn test_out_of_range_accepts_unsized_values() {
    let failure = Failure::out_of_range("word", "zebra", "apple", "mango");

    assert_eq!(failure.kind(), FailureKind::OutOfRange);
    assert!(failure.message().contains("\"zebra\""));
}

#[test]
fn test_custom_failure_keeps_message_verbatim() {
    let failure = Failure::custom(String::from("replicas"), "replicas must be odd");

    assert_eq!(failure.kind(), FailureKind::Custom);
    assert_eq!(failure.name(), "replicas");
    assert_eq!(failure.to_string(), "replicas must be odd");
}

#[test]
fn test_failure_kind_display() {
    assert_eq!(FailureKind::NullArgument.to_string(), "NullArgument");
    assert_eq!(FailureKind::BooleanMismatch.as_str(), "BooleanMismatch");
}

#[test]
fn test_failures_are_hashable_values() {
    let mut set = HashSet::new();
    set.insert(Failure::null("a"));
    set.insert(Failure::null("a"));
    set.insert(Failure::empty("a"));

    assert_eq!(set.len(), 2);
}

#[cfg(feature = "serde")]
#[test]
fn test_failure_serializes_fields() {
    let json = serde_json::to_value(Failure::null("id")).unwrap();

    assert_eq!(json["kind"], "NullArgument");
    assert_eq!(json["name"], "id");
    assert_eq!(json["message"], "id is null; a value must be provided");
}
