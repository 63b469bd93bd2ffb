//! Integration tests for forward parent and zone references

use quickbuild_foundation::{Identifier, ObjectRef};
use quickbuild_grid::{BuildOptions, Grid, PendingKind, PendingRef, RoomKind, build};
use quickbuild_language::LineClassifier;

fn id(s: &str) -> Identifier {
    Identifier::new(s)
}

fn build_ok(source: &str) -> Grid {
    let directives = LineClassifier::classify_source("grid.qb", source);
    build(&directives, BuildOptions::default()).unwrap().0
}

#[test]
fn forward_parent_becomes_single_real_room() {
    let source = "ROOM PARENT: \"Zero\"\n\
                  IN \"Zero\"\n@set here=SAFE\nENDIN\n\
                  \"n\" : \"One\" -> \"Two\"\n\
                  \"z\" : \"Two\" -> \"Zero\"";
    let grid = build_ok(source);
    let zeros = grid
        .rooms()
        .filter(|r| r.id == id("\"Zero\""))
        .count();
    assert_eq!(zeros, 1);
    let zero = grid.room(&id("\"Zero\"")).unwrap();
    assert_eq!(zero.kind, RoomKind::Room);
    assert_eq!(zero.buffer(), "@set here=SAFE");
    assert_eq!(zero.parent, None);
    assert_eq!(
        grid.room(&id("\"One\"")).unwrap().parent,
        Some(ObjectRef::by_id(&id("\"Zero\"")))
    );
}

#[test]
fn shared_placeholder_is_resolved_in_both_tables() {
    let source = "ROOM PARENT: \"Master\"\nROOM ZONE: \"Master\"\n\
                  IN \"Master\"\n@desc here=first\nENDIN\n\
                  ROOM PARENT:\nROOM ZONE:\n\
                  \"n\" : \"Master\" -> \"Elsewhere\"";
    let grid = build_ok(source);
    assert_eq!(grid.room(&id("\"Master\"")).unwrap().buffer(), "@desc here=first");
    for kind in [PendingKind::Parent, PendingKind::Zone] {
        assert_eq!(
            grid.pending(kind).get(&id("\"Master\"")),
            Some(&PendingRef::Resolved(id("\"Master\"")))
        );
    }
}

#[test]
fn zone_buffer_comes_before_parent_buffer() {
    let source = "ROOM ZONE: \"M\"\n\
                  IN \"M\"\nzonecode\nENDIN\n\
                  ROOM PARENT: \"M\"\n\
                  IN \"M\"\nparentcode\nENDIN\n\
                  ROOM PARENT:\nROOM ZONE:\n\
                  \"n\" : \"M\" -> \"Other\"";
    let grid = build_ok(source);
    let room = grid.room(&id("\"M\"")).unwrap();
    assert_eq!(room.kind, RoomKind::Room);
    assert_eq!(room.buffer(), "zonecode\nparentcode");
}

#[test]
fn reference_to_existing_room_is_resolved_immediately() {
    let grid = build_ok("\"n\" : \"Base\" -> \"Next\"\nEXIT PARENT: \"Base\"");
    assert_eq!(
        grid.pending(PendingKind::Parent).get(&id("\"Base\"")),
        Some(&PendingRef::Resolved(id("\"Base\"")))
    );
}

#[test]
fn placeholder_records_attr_base_at_first_mention() {
    let grid = build_ok("ATTR BASE: ONE.\nROOM ZONE: \"Z\"\nATTR BASE: TWO.\nROOM ZONE: \"Z\"");
    match grid.pending(PendingKind::Zone).get(&id("\"Z\"")) {
        Some(PendingRef::Placeholder(placeholder)) => {
            assert_eq!(placeholder.attr_base, "ONE.");
            assert_eq!(placeholder.display_name(), "Z");
        }
        other => panic!("expected a placeholder, got {other:?}"),
    }
}

#[test]
fn unbuilt_references_promote_to_proxy_things() {
    let mut grid = build_ok("ROOM PARENT: \"P\"\nEXIT ZONE: \"Z\"\n\"n\" : \"A\" -> \"B\"");
    let promotion = grid.promote_placeholders();
    assert_eq!(promotion.parents, vec![id("\"P\"")]);
    assert_eq!(promotion.zones, vec![id("\"Z\"")]);
    assert_eq!(grid.room(&id("\"P\"")).unwrap().kind, RoomKind::ProxyThing);
    assert!(grid.promote_placeholders().is_empty());
}

#[test]
fn raw_references_need_no_placeholder() {
    let grid = build_ok("ROOM PARENT: #100\nROOM ZONE: #200");
    assert!(grid.pending(PendingKind::Parent).is_empty());
    assert!(grid.pending(PendingKind::Zone).is_empty());
}
