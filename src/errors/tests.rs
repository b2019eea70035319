//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnknownByte { byte: 0x07 },
        Position(10, Rc::new("test.txt".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnknownByte");
    assert_eq!(error.kind(), &ErrorImpl::UnknownByte { byte: 0x07 });
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("test.txt".to_string()));
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: "(".to_string(),
            found: "x".to_string(),
        },
        pos.clone(),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_position(), &pos);
}

#[test]
fn test_unexpected_token_error() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: "(".to_string(),
            found: "x".to_string(),
        },
        Position(0, Rc::new("test.txt".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.get_tip().to_string(), "Expected `(`, found `x`");
}

#[test]
fn test_malformed_pattern_error() {
    let error = Error::new(
        ErrorImpl::MalformedPattern {
            rule: 2,
            reason: "empty charset".to_string(),
        },
        Position(3, Rc::new("rule 2".to_string())),
    );

    assert_eq!(error.get_error_name(), "MalformedPattern");
    assert_eq!(
        error.to_string(),
        "malformed pattern in rule 2: empty charset at rule 2:3"
    );
}

#[test]
fn test_too_many_states_error() {
    let error = Error::new(
        ErrorImpl::TooManyStates { rule: 0, limit: 32 },
        Position(0, Rc::new("test.txt".to_string())),
    );

    assert_eq!(error.get_error_name(), "TooManyStates");
}

#[test]
fn test_unknown_byte_display() {
    let error = Error::new(
        ErrorImpl::UnknownByte { byte: 0x1b },
        Position(5, Rc::new("shell".to_string())),
    );

    assert_eq!(error.to_string(), "unknown byte: 0x1b at shell:5");
    assert_eq!(error.get_tip().to_string(), "Unknown character: 1b");
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: ")".to_string(),
            found: "end of input".to_string(),
        },
        Position(0, Rc::new("test.txt".to_string())),
    );

    let ErrorTip::Suggestion(tip) = error.get_tip();
    assert_eq!(tip, "Expected `)`, found `end of input`");
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");
}

#[test]
fn test_every_error_has_a_tip() {
    let position = Position(0, Rc::new("test.txt".to_string()));
    let kinds = [
        ErrorImpl::UnknownByte { byte: 0x07 },
        ErrorImpl::UnexpectedToken {
            expected: "(".to_string(),
            found: "x".to_string(),
        },
        ErrorImpl::MalformedPattern {
            rule: 0,
            reason: "empty charset".to_string(),
        },
        ErrorImpl::TooManyStates { rule: 0, limit: 32 },
    ];

    for kind in kinds {
        let error = Error::new(kind, position.clone());
        assert!(!error.get_tip().to_string().is_empty());
        assert!(crate::format_error(&error, None)
            .starts_with(&format!("Error: {} (", error.get_error_name())));
    }
}
