//! Integration tests for command ordering

use quickbuild_codegen::{CodeGenerator, EmitMode, Generated, VERSION, generate};
use quickbuild_grid::{BuildOptions, Grid, build};
use quickbuild_language::LineClassifier;

fn grid_of(source: &str) -> Grid {
    let directives = LineClassifier::classify_source("grid.qb", source);
    build(&directives, BuildOptions::default()).unwrap().0
}

fn compile(source: &str, mode: EmitMode) -> Generated {
    generate(grid_of(source), mode).unwrap()
}

fn position(generated: &Generated, command: &str) -> usize {
    generated
        .commands
        .iter()
        .position(|c| c == command)
        .unwrap_or_else(|| panic!("missing command: {command}"))
}

#[test]
fn sections_appear_in_order() {
    let source = "ATTR BASE: A`B`\nROOM PARENT: \"P\"\n\"n\" : \"X\" -> \"Y\"";
    let generated = compile(source, EmitMode::Managed);
    let header = position(&generated, &format!("@@ Generated by quickbuild v{VERSION}"));
    let trees = position(&generated, "think Constructing attribute trees");
    let parents = position(&generated, "think Creating room & exit parents as things");
    let digging = position(&generated, "think Digging Rooms");
    let linking = position(&generated, "think Linking Rooms");
    assert!(header < trees && trees < parents && parents < digging && digging < linking);
}

#[test]
fn parentless_rooms_precede_parented_ones() {
    let grid = grid_of(
        "ROOM PARENT: #1\n\"n\" : \"Child\" -> \"Child2\"\nROOM PARENT:\n\"n\" : \"Child2\" -> \"Root\"",
    );
    let generator = CodeGenerator::new(&grid, EmitMode::Managed);
    let order: Vec<_> = generator
        .build_order()
        .into_iter()
        .map(|r| r.display_name())
        .collect();
    assert_eq!(order, vec!["Root", "Child", "Child2"]);
}

#[test]
fn exits_are_linked_from_their_source_room() {
    let generated = compile(
        "\"n\" : \"A\" -> \"B\"\n\"s\" : \"B\" -> \"A\"",
        EmitMode::Unmanaged,
    );
    let in_a = position(&generated, "@teleport [v(ROOM.A)]");
    let open_n = position(&generated, "@open n=[v(ROOM.B)]");
    let in_b = position(&generated, "@teleport [v(ROOM.B)]");
    let open_s = position(&generated, "@open s=[v(ROOM.A)]");
    assert!(in_a < open_n && open_n < in_b && in_b < open_s);
}

#[test]
fn room_with_only_code_is_visited() {
    let generated = compile(
        "\"n\" : \"A\" -> \"B\"\nIN \"B\"\n@desc here=End.\nENDIN",
        EmitMode::Unmanaged,
    );
    let visit = position(&generated, "@teleport [v(ROOM.B)]");
    assert_eq!(generated.commands[visit + 1], "@desc here=End.");
}

#[test]
fn edge_list_wraps_at_75_columns() {
    let mut source = String::new();
    for i in 0..20 {
        source.push_str(&format!("\"n\" : \"Room{i}\" -> \"Room{}\"\n", i + 1));
    }
    let generated = compile(&source, EmitMode::Managed);
    let edge_lines: Vec<_> = generated
        .commands
        .iter()
        .skip(1)
        .take_while(|c| c.starts_with("@@ "))
        .collect();
    assert!(edge_lines.len() > 1);
    assert!(edge_lines.iter().all(|l| l.len() <= 75 + 3));
    assert!(edge_lines[0].starts_with("@@ Room0-->Room1 Room1-->Room2"));
}

#[test]
fn empty_grid_has_header_and_section_markers_only() {
    let generated = compile("# nothing here", EmitMode::Managed);
    assert_eq!(
        generated.commands,
        vec![
            format!("@@ Generated by quickbuild v{VERSION}"),
            "think Digging Rooms".to_string(),
            "think Linking Rooms".to_string(),
        ]
    );
    assert_eq!(generated.to_text().lines().count(), 3);
}
