//! Integration tests for exit naming and aliases

use quickbuild_foundation::Identifier;
use quickbuild_grid::{BuildOptions, NamingOptions, build, exit_name, short_form};
use quickbuild_language::LineClassifier;

fn full_names(source: &str, options: BuildOptions) -> Vec<String> {
    let directives = LineClassifier::classify_source("grid.qb", source);
    let (grid, _) = build(&directives, options).unwrap();
    grid.edges().map(|e| e.full_name.clone()).collect()
}

#[test]
fn bracketed_name_gets_alias() {
    assert_eq!(
        full_names("\"<N>orth\" : \"A\" -> \"B\"", BuildOptions::default()),
        vec!["<N>orth;N"]
    );
}

#[test]
fn given_aliases_follow_derived_alias() {
    assert_eq!(
        full_names("\"<O>ut;exit;leave\" : \"A\" -> \"B\"", BuildOptions::default()),
        vec!["<O>ut;O;exit;leave"]
    );
}

#[test]
fn nobrackets_keeps_name_as_written() {
    let options = BuildOptions::default()
        .with_naming(NamingOptions::default().with_detect_brackets(false));
    assert_eq!(
        full_names("\"<N>orth\" : \"A\" -> \"B\"", options),
        vec!["<N>orth"]
    );
}

#[test]
fn autobrackets_applies_to_plain_names() {
    let options =
        BuildOptions::default().with_naming(NamingOptions::default().with_auto_brackets(true));
    assert_eq!(
        full_names("\"South West\" : \"A\" -> \"B\"", options),
        vec!["<S>outh <W>est;SW"]
    );
}

#[test]
fn explicit_alias_wins_over_derivation() {
    assert_eq!(
        full_names(
            "ALIAS \"<N>orth\" \"North;n;no\"\n\"<N>orth\" : \"A\" -> \"B\"",
            BuildOptions::default()
        ),
        vec!["North;n;no"]
    );
}

#[test]
fn short_form_of_generated_name() {
    let full = exit_name(Identifier::new("\"<U>p;climb\"").display_name(), NamingOptions::default());
    assert_eq!(full, "<U>p;U;climb");
    assert_eq!(short_form(&full), "<U>p");
}
