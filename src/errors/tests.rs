//! Unit tests for error handling.
//!
//! This module contains tests for error names, tips and messages.

use crate::errors::errors::{Error, ErrorTip};

#[test]
fn test_invalid_range_error() {
    let error = Error::InvalidRange { start: 5, end: 3 };

    assert_eq!(error.get_error_name(), "InvalidRange");
    assert_eq!(
        error.to_string(),
        "invalid range: end 3 is before start 5"
    );
}

#[test]
fn test_invalid_line_column_error() {
    let error = Error::InvalidLineColumn { line: 0, column: 1 };

    assert_eq!(error.get_error_name(), "InvalidLineColumn");
    assert!(error.to_string().contains("0:1"));
}

#[test]
fn test_invalid_source_type_error() {
    let error = Error::InvalidSourceType { valid_up_to: 7 };

    assert_eq!(error.get_error_name(), "InvalidSourceType");
    assert!(error.to_string().contains("byte 7"));
}

#[test]
fn test_out_of_bounds_error() {
    let error = Error::OutOfBounds {
        start: 2,
        end: 10,
        length: 5,
    };

    assert_eq!(error.get_error_name(), "OutOfBounds");
    assert_eq!(
        error.to_string(),
        "range 2..10 is out of bounds for source of length 5"
    );
}

#[test]
fn test_unknown_token_kind_error() {
    let error = Error::UnknownTokenKind {
        tag: "bogus".to_string(),
    };

    assert_eq!(error.get_error_name(), "UnknownTokenKind");
    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::OutOfBounds {
        start: 0,
        end: 9,
        length: 4,
    };

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "Valid offsets are 0..=4"),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_errors_compare_by_value() {
    assert_eq!(
        Error::InvalidRange { start: 1, end: 0 },
        Error::InvalidRange { start: 1, end: 0 }
    );
    assert_ne!(
        Error::InvalidRange { start: 1, end: 0 },
        Error::InvalidRange { start: 2, end: 0 }
    );
}

#[test]
fn test_invalid_source_type_from_utf8_error() {
    let bytes = [b'a', b'b', 0xc3];
    let error = Error::from(std::str::from_utf8(&bytes).unwrap_err());

    assert_eq!(error, Error::InvalidSourceType { valid_up_to: 2 });
}
