//! Integration tests for the escaping tables

use proptest::prelude::*;
use quickbuild_foundation::escape::BAD_ATTR_CHARS;
use quickbuild_foundation::{escape_attr, escape_code};

// =============================================================================
// Code Escaping
// =============================================================================

#[test]
fn code_escape_protects_evaluator_characters() {
    assert_eq!(escape_code("[v(X)]"), "\\[v\\(X\\)\\]");
    assert_eq!(escape_code("50% off, {today}"), "50\\% off\\, \\{today\\}");
    assert_eq!(escape_code("$cmd ^listen"), "\\$cmd \\^listen");
}

#[test]
fn code_escape_collapses_line_breaks() {
    assert_eq!(escape_code("a\r\nb\nc\rd"), "a%rb%rc%rd");
}

#[test]
fn code_escape_leaves_plain_text() {
    assert_eq!(escape_code("A quiet grove."), "A quiet grove.");
}

// =============================================================================
// Attribute Escaping
// =============================================================================

#[test]
fn attr_escape_examples() {
    assert_eq!(escape_attr("Red Room"), "Red_Room");
    assert_eq!(escape_attr("Hall\"2"), "Hall$222");
    assert_eq!(escape_attr("a:b"), "a$3ab");
    assert_eq!(escape_attr("x|y"), "x$7cy");
}

proptest! {
    #[test]
    fn attr_escape_output_is_portable(text in ".{0,40}") {
        let escaped = escape_attr(&text);
        prop_assert!(!escaped.contains(' '));
        prop_assert!(escaped.chars().all(|c| !BAD_ATTR_CHARS.contains(&c)));
    }

    #[test]
    fn code_escape_never_leaves_bare_brackets(text in ".{0,40}") {
        let escaped = escape_code(&text);
        let mut chars = escaped.chars();
        while let Some(c) = chars.next() {
            if c == '\\' {
                chars.next();
            } else {
                prop_assert!(c != '[' && c != ']');
            }
        }
    }
}
