//! Integration tests for version parsing and ordering.

use std::cmp::Ordering;

use gate_version::{Version, VersionError, compare, parse};
use rstest::rstest;

#[rstest]
#[case("1.0", "1.0", Ordering::Equal)]
#[case("1.0", "1.1", Ordering::Less)]
#[case("2.0", "1.9", Ordering::Greater)]
#[case("2.x", "2.0", Ordering::Equal)]
#[case("3.5", "3.x", Ordering::Greater)]
#[case("3.0", "3.x", Ordering::Equal)]
#[case("2.8.1", "2.8", Ordering::Greater)]
#[case("2.8", "2.8.0", Ordering::Equal)]
#[case("2.9", "2.10", Ordering::Less)]
#[case("1.10.0", "1.9.99", Ordering::Greater)]
fn test_compare_cases(#[case] a: &str, #[case] b: &str, #[case] expected: Ordering) {
    let a = parse(a).unwrap();
    let b = parse(b).unwrap();
    assert_eq!(compare(&a, &b), expected);
    assert_eq!(compare(&b, &a), expected.reverse());
}

#[rstest]
#[case("")]
#[case("latest")]
#[case("2.8-beta")]
#[case("v2.8")]
#[case("2,8")]
#[case("2. 8")]
#[case("2.x.x")]
fn test_malformed_versions_rejected(#[case] raw: &str) {
    assert!(Version::parse(raw).is_err(), "expected '{raw}' to be rejected");
}

#[test]
fn test_error_names_offending_value() {
    let err = parse("2.8-beta").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("2.8-beta"), "message was: {message}");
    assert!(message.contains("component 2"), "message was: {message}");
    assert!(matches!(err, VersionError::InvalidComponent { position: 2, .. }));
}

#[test]
fn test_sorting_mixed_lengths() {
    let mut versions: Vec<Version> = ["3.0", "2.10", "2.9.1", "2", "2.x.", "1.0.0.1"]
        .iter()
        .filter_map(|s| s.parse().ok())
        .collect();
    versions.sort();

    let sorted: Vec<String> = versions.iter().map(ToString::to_string).collect();
    assert_eq!(sorted, vec!["1.0.0.1", "2", "2.9.1", "2.10", "3.0"]);
}
