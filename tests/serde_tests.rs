#![cfg(feature = "serde")]

//! Integration tests for serde support.
//!
//! `Maybe` and `Outcome` serialize as externally tagged enums.

use explicit::{Maybe, Outcome, err, none, ok, some};
use rstest::rstest;

// =============================================================================
// Maybe
// =============================================================================

#[rstest]
fn test_maybe_json_roundtrip() {
    let present: Maybe<String> = some("ferris".to_string());
    let absent: Maybe<String> = none();

    let present_json = serde_json::to_string(&present).unwrap();
    let absent_json = serde_json::to_string(&absent).unwrap();

    let restored_present: Maybe<String> = serde_json::from_str(&present_json).unwrap();
    let restored_absent: Maybe<String> = serde_json::from_str(&absent_json).unwrap();

    assert_eq!(present, restored_present);
    assert_eq!(absent, restored_absent);
}

#[rstest]
#[case(some(3), r#"{"Present":3}"#)]
#[case(none(), r#""Absent""#)]
fn test_maybe_json_shape(#[case] value: Maybe<i32>, #[case] expected: &str) {
    assert_eq!(serde_json::to_string(&value).unwrap(), expected);
}

// =============================================================================
// Outcome
// =============================================================================

#[rstest]
fn test_outcome_json_roundtrip() {
    let success: Outcome<i32, String> = ok(42);
    let failure: Outcome<i32, String> = err("invalid".to_string());

    let success_json = serde_json::to_string(&success).unwrap();
    let failure_json = serde_json::to_string(&failure).unwrap();

    let restored_success: Outcome<i32, String> = serde_json::from_str(&success_json).unwrap();
    let restored_failure: Outcome<i32, String> = serde_json::from_str(&failure_json).unwrap();

    assert_eq!(success, restored_success);
    assert_eq!(failure, restored_failure);
}

#[rstest]
fn test_outcome_json_shape() {
    let failure: Outcome<i32, &str> = err("invalid");
    assert_eq!(
        serde_json::to_string(&failure).unwrap(),
        r#"{"Failure":"invalid"}"#
    );
}

#[rstest]
fn test_nested_json_roundtrip() {
    let nested: Outcome<Vec<Maybe<u8>>, String> = ok(vec![some(1), none(), some(3)]);
    let json = serde_json::to_string(&nested).unwrap();
    let restored: Outcome<Vec<Maybe<u8>>, String> = serde_json::from_str(&json).unwrap();
    assert_eq!(nested, restored);
}

#[rstest]
fn test_unknown_variant_is_rejected() {
    let result = serde_json::from_str::<Maybe<i32>>(r#"{"Some":1}"#);
    assert!(result.is_err());
}
