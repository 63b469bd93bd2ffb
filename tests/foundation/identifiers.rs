//! Integration tests for identifiers and object references

use quickbuild_foundation::{Identifier, ObjectRef, RefKind};

#[test]
fn identifier_keeps_source_text() {
    let id = Identifier::from("\"Hall\"east");
    assert_eq!(id.as_str(), "\"Hall\"east");
    assert_eq!(id.to_string(), "\"Hall\"east");
}

#[test]
fn suffix_distinguishes_same_display_name() {
    let first = Identifier::new("\"Hall\"");
    let second = Identifier::new("\"Hall\"2");
    assert_eq!(first.display_name(), second.display_name());
    assert_ne!(first.attr_id(), second.attr_id());
}

#[test]
fn display_name_spans_inner_quotes() {
    let id = Identifier::new("\"The \"Big\" Top\"");
    assert_eq!(id.display_name(), "The \"Big\" Top");
}

#[test]
fn raw_reference_passes_through() {
    let reference = ObjectRef::raw("#1234");
    assert_eq!(reference.kind, RefKind::Raw);
    assert_eq!(reference.target, "#1234");
}

#[test]
fn id_reference_round_trips_identifier() {
    let id = Identifier::new("\"Parent Room\"");
    let reference = ObjectRef::by_id(&id);
    assert_eq!(reference.kind, RefKind::ById);
    assert_eq!(reference.identifier(), Some(id));
}
