use arg_rail::checks;
use arg_rail::{Bound, FailureKind, UsageError};

#[test]
fn test_require_name() {
    assert!(checks::require_name("id").is_ok());
    assert_eq!(checks::require_name(""), Err(UsageError::EmptyName));
}

#[test]
fn test_require_bounds() {
    assert_eq!(checks::require_bounds(Some(1), Some(1)), Ok((1, 1)));
    assert_eq!(
        checks::require_bounds(None::<i32>, Some(1)),
        Err(UsageError::MissingBound { bound: Bound::Min })
    );
    assert_eq!(
        checks::require_bounds(Some(1), None),
        Err(UsageError::MissingBound { bound: Bound::Max })
    );
    assert_eq!(
        checks::require_bounds(Some(2.5), Some(1.0)),
        Err(UsageError::InvertedBounds { min: "2.5".into(), max: "1".into() })
    );
}

#[test]
fn test_not_null() {
    assert!(checks::not_null(Some(&0), "count").is_ok());
    assert!(checks::not_null(Some("unsized"), "label").is_ok());

    let failure = checks::not_null::<str>(None, "label").unwrap_err();
    assert_eq!(failure.kind(), FailureKind::NullArgument);
    assert_eq!(failure.name(), "label");
}

#[test]
fn test_not_null_or_empty() {
    assert!(checks::not_null_or_empty(Some(" "), "title").is_ok());
    assert_eq!(checks::not_null_or_empty(None, "title").unwrap_err().kind(), FailureKind::NullArgument);
    assert_eq!(checks::not_null_or_empty(Some(""), "title").unwrap_err().kind(), FailureKind::EmptyArgument);
}

#[test]
fn test_within_range() {
    assert!(checks::within_range(Some(&5), "n", &1, &10).is_ok());
    assert!(checks::within_range(Some("m"), "letter", "a", "z").is_ok());

    assert_eq!(checks::within_range(Some(&0), "n", &1, &10).unwrap_err().kind(), FailureKind::OutOfRange);
    assert_eq!(checks::within_range(None, "n", &1, &10).unwrap_err().kind(), FailureKind::NullArgument);
}

#[test]
fn test_numeric_accepts_numbers() {
    for text in ["0", "-17", "+4", "3.14", "1e6", " 42 ", "-0.5"] {
        assert!(checks::numeric(Some(text), "n").is_ok(), "{text:?} should be numeric");
    }
}

#[test]
fn test_numeric_rejects_other_text() {
    for text in ["abc", "12abc", "1,000", "inf", "NaN", "   "] {
        let failure = checks::numeric(Some(text), "n").unwrap_err();
        assert_eq!(failure.kind(), FailureKind::NotNumeric, "{text:?}");
    }
    assert_eq!(checks::numeric(Some(""), "n").unwrap_err().kind(), FailureKind::EmptyArgument);
    assert_eq!(checks::numeric(None, "n").unwrap_err().kind(), FailureKind::NullArgument);
}

#[test]
fn test_boolean_checks() {
    assert!(checks::is_true(true, "flag").is_ok());
    assert!(checks::is_false(false, "flag").is_ok());
    assert_eq!(checks::is_true(false, "flag").unwrap_err().message(), "flag must be true, but was false");
    assert_eq!(checks::is_false(true, "flag").unwrap_err().message(), "flag must be false, but was true");
}
