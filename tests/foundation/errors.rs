//! Integration tests for Error and Diagnostic types
//!
//! Tests error construction, display, location context, and error kinds.

use quickbuild_foundation::{Diagnostic, Diagnostics, Error, ErrorKind, Location};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_exit_missing() {
    let err = Error::exit_missing("\"s\"", "\"Attic\"");
    assert!(matches!(err.kind, ErrorKind::ExitMissing { .. }));
    assert_eq!(err.to_string(), "Exit \"s\" doesn't exist in room \"Attic\"");
}

#[test]
fn error_invalid_mode() {
    let err = Error::invalid_mode("managed with no-side-effects");
    assert!(matches!(err.kind, ErrorKind::InvalidMode(_)));
    assert!(err.location.is_none());
}

#[test]
fn error_io_keeps_path() {
    let source = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let err = Error::io("grid.qb", &source);
    assert_eq!(err.to_string(), "cannot read grid.qb: gone");
}

// =============================================================================
// Error Display
// =============================================================================

#[test]
fn located_error_prefix() {
    let err = Error::room_missing("\"Vault\"").with_location(Location::new("b.qb", 17));
    assert_eq!(
        err.to_string(),
        "File 'b.qb' Line 17: Room \"Vault\" doesn't exist"
    );
}

#[test]
fn later_location_replaces_earlier() {
    let err = Error::directive("boom")
        .with_location(Location::new("a.qb", 1))
        .with_location(Location::new("a.qb", 2));
    assert_eq!(err.location.map(|l| l.line), Some(2));
}

// =============================================================================
// Diagnostics
// =============================================================================

#[test]
fn diagnostics_keep_order() {
    let mut all = Diagnostics::new();
    all.push(Diagnostic::at(Location::new("g.qb", 4), "first"));
    all.push(Diagnostic::structural("second"));
    let messages: Vec<_> = all.iter().map(|d| d.message.as_str()).collect();
    assert_eq!(messages, vec!["first", "second"]);
}

#[test]
fn diagnostics_extend_appends() {
    let mut first = Diagnostics::new();
    first.push(Diagnostic::structural("a"));
    let mut second = Diagnostics::new();
    second.push(Diagnostic::structural("b"));
    first.extend(second);
    assert_eq!(first.len(), 2);
    assert_eq!((&first).into_iter().last().unwrap().message, "b");
}
