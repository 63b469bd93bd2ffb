//! Integration tests for directives outside any block

use quickbuild_foundation::{Identifier, Location, ObjectRef};
use quickbuild_language::{Directive, LineClassifier, ParserState, Payload, classify_sources};

fn payloads(source: &str) -> Vec<Payload> {
    LineClassifier::classify_source("grid.qb", source)
        .into_iter()
        .map(|d| d.payload)
        .collect()
}

fn id(s: &str) -> Identifier {
    Identifier::new(s)
}

// =============================================================================
// Simple Directives
// =============================================================================

#[test]
fn attr_base_and_reset() {
    assert_eq!(
        payloads("ATTR BASE: QB`GRID`\nATTR BASE:"),
        vec![
            Payload::AttrBase("QB`GRID`".to_string()),
            Payload::AttrBase(String::new())
        ]
    );
}

#[test]
fn alias_and_reverse_are_case_insensitive() {
    assert_eq!(
        payloads("alias: \"N\" \"<N>orth;n\"\nReverse \"N\" \"S\""),
        vec![
            Payload::Alias {
                exit: id("\"N\""),
                aliases: "<N>orth;n".to_string()
            },
            Payload::Reverse {
                exit: id("\"N\""),
                reverse: id("\"S\"")
            },
        ]
    );
}

#[test]
fn zone_by_id_and_flags_reset() {
    assert_eq!(
        payloads("EXIT ZONE: \"Gatehouse\"\nROOM FLAGS:"),
        vec![
            Payload::ExitZone(Some(ObjectRef::by_id(&id("\"Gatehouse\"")))),
            Payload::RoomFlags(None),
        ]
    );
}

#[test]
fn describe_with_suffixed_id() {
    assert_eq!(
        payloads("DESC \"Hall\"2=A second hall."),
        vec![Payload::BufferRoom {
            room: id("\"Hall\"2"),
            text: "\n@describe here=A second hall.".to_string()
        }]
    );
}

// =============================================================================
// Grid Links
// =============================================================================

#[test]
fn two_hop_link_expands_in_order() {
    let got = payloads(r#""X" : "A" -> "B" -> "C""#);
    assert_eq!(
        got,
        vec![
            Payload::CreateRoom(id("\"A\"")),
            Payload::CreateRoom(id("\"B\"")),
            Payload::CreateExit {
                exit: id("\"X\""),
                from: id("\"A\""),
                to: id("\"B\"")
            },
            Payload::CreateRoom(id("\"C\"")),
            Payload::CreateExit {
                exit: id("\"X\""),
                from: id("\"B\""),
                to: id("\"C\"")
            },
        ]
    );
}

#[test]
fn two_way_hop_adds_reverse() {
    let got = payloads(r#""in" : "Porch" <-> "Parlor""#);
    assert_eq!(
        got.last(),
        Some(&Payload::CreateReverseExit {
            exit: id("\"in\""),
            from: id("\"Porch\""),
            to: id("\"Parlor\"")
        })
    );
}

#[test]
fn link_without_spaces() {
    assert_eq!(payloads(r#""e":"A"->"B""#).len(), 3);
}

// =============================================================================
// Errors and Sources
// =============================================================================

#[test]
fn unrecognized_line_stops_everything_after_it() {
    let directives = LineClassifier::classify_source("grid.qb", "BOGUS\n\"n\" : \"A\" -> \"B\"");
    assert_eq!(directives.len(), 1);
    assert_eq!(directives[0].location, Location::new("grid.qb", 1));
    assert!(matches!(&directives[0].payload, Payload::Error(m) if m == "Unrecognized command: BOGUS"));
}

#[test]
fn each_source_starts_fresh() {
    let directives: Vec<Directive> = classify_sources([
        ("a.qb", "IN \"A\""),
        ("b.qb", "\"n\" : \"A\" -> \"B\""),
    ]);
    assert!(matches!(directives.last().unwrap().payload, Payload::CreateExit { .. }));
    assert_eq!(directives.last().unwrap().location.file.as_ref(), "b.qb");
}

#[test]
fn classifier_starts_in_default_state() {
    assert_eq!(LineClassifier::new("x").state(), &ParserState::Default);
}
