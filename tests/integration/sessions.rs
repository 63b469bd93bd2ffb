//! Session-level tests: multiple sources, options, and error reporting

use std::io::Write;

use quickbuild::codegen::EmitMode;
use quickbuild::foundation::ErrorKind;
use quickbuild::runtime::{CompileOptions, ConfigSource, Session, SourceFile};

#[test]
fn configuration_source_is_read_first() {
    let sources = [
        SourceFile::new("qb.cfg", "ATTR BASE: AREA.\nREVERSE \"in\" \"out\""),
        SourceFile::new("house.qb", "\"in\" : \"Porch\" <-> \"Hall\""),
    ];
    let compilation = Session::new(CompileOptions::unmanaged())
        .compile(&sources)
        .unwrap();
    assert!(compilation.commands.iter().any(|c| c == "@open out=[v(AREA.Porch)]"));
    assert!(compilation.diagnostics.is_empty());
}

#[test]
fn forward_reference_across_files() {
    let sources = [
        SourceFile::new("a.qb", "ROOM ZONE: \"Town\"\n\"n\" : \"Gate\" -> \"Square\"\nROOM ZONE:"),
        SourceFile::new("b.qb", "\"s\" : \"Square\" -> \"Town\"\n\"t\" : \"Town\" -> \"Gate\""),
    ];
    let (grid, _) = Session::default().build(&sources).unwrap();
    assert_eq!(grid.room_count(), 3);
    let compilation = Session::default().compile(&sources).unwrap();
    assert!(compilation.commands.iter().any(|c| c == "@chzone here=[v(ROOM.Town)]"));
}

#[test]
fn one_way_reverse_option() {
    let options = CompileOptions::default().with_bidirectional_reverse(false);
    let err = Session::new(options)
        .compile_str("g.qb", "REVERSE \"n\" \"s\"\n\"s\" : \"A\" <-> \"B\"")
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MissingReverse(_)));
}

#[test]
fn auto_brackets_option() {
    let options = CompileOptions::unmanaged().with_auto_brackets(true);
    let compilation = Session::new(options)
        .compile_str("g.qb", "\"Up Stairs\" : \"A\" -> \"B\"")
        .unwrap();
    assert!(compilation.commands.iter().any(|c| c == "@open <U>p <S>tairs;US=[v(ROOM.B)]"));
}

#[test]
fn mode_is_fixed_by_options() {
    let session = Session::new(CompileOptions::no_side_effects());
    assert_eq!(session.options().mode, EmitMode::NoSideEffects);
}

#[test]
fn sources_load_from_disk() {
    let dir = std::env::temp_dir().join(format!("quickbuild-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("grid.qb");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "\"n\" : \"A\" -> \"B\"").unwrap();
    drop(file);

    let source = SourceFile::load(&path).unwrap();
    assert_eq!(source.name, path.display().to_string());

    let config = ConfigSource::File(path.clone()).load().unwrap();
    assert_eq!(config.len(), 1);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn missing_explicit_config_is_an_error() {
    let err = ConfigSource::File("/no/such/qb.cfg".into()).load().unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Io { .. }));
}
