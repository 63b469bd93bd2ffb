//! The ordered line pattern table.
//!
//! Patterns are tried top to bottom against the trimmed line. Order matters:
//! the classifier takes the first pattern that both matches and has a handler
//! for its current state, so an earlier pattern shadows every later one.

use std::sync::LazyLock;

use regex::Regex;

/// A quoted identifier with an optional glued suffix (`"Hall"2`).
const ID: &str = r#"".*"(?:[^\->\s]\S*)?"#;
/// Same as [`ID`] but stops at the first closing quote, for multi-id lines.
const LAZY_ID: &str = r#"".*?"(?:[^\->\s]\S*)?"#;
/// Identifier form used by `DESCRIBE`, whose suffix may not contain `=`.
const DESC_ID: &str = r#"".*?"(?:[^\-=>\s]\S*)?"#;

/// Objects a sticky parent, zone, or flags default applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    /// `ROOM ...`
    Room,
    /// `EXIT ...`
    Exit,
}

/// Which sticky reference a directive sets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    /// `... PARENT:`
    Parent,
    /// `... ZONE:`
    Zone,
}

/// The value form of a `PARENT:`/`ZONE:` line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefForm {
    /// Nothing after the colon.
    Reset,
    /// A `#dbref`.
    Raw,
    /// A quoted identifier.
    Id,
}

/// Every line shape the classifier knows, in priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    /// Empty or whitespace-only.
    Blank,
    /// `@@` softcode comment (blocks only).
    Ignored,
    /// `>` literal continuation (blocks only).
    Literal,
    /// `#` comment.
    Comment,
    /// `ATTR BASE: <path>`
    AttrBase,
    /// `ALIAS "<exit>" "<aliases>"`
    Alias,
    /// `REVERSE "<exit>" "<reverse>"`
    Reverse,
    /// `ROOM|EXIT PARENT|ZONE: ...`
    Reference(Target, Slot, RefForm),
    /// `ROOM|EXIT FLAGS: ...`; `true` when a value is present.
    Flags(Target, bool),
    /// `"<exit>" : "<room>" -> "<room>" ...`
    GridLink,
    /// `IN "<room>"`
    In,
    /// `ON "<exit>" FROM "<room>"`
    On,
    /// `ENDIN`
    EndIn,
    /// `ENDON`
    EndOn,
    /// `DESC[RIBE] "<room>"=<text>`
    Describe,
    /// Anything else that is not empty.
    Anything,
}

impl Rule {
    /// Returns true for directives that only make sense outside a block.
    ///
    /// Inside a block these lines are kept as code and warned about.
    #[must_use]
    pub fn is_base_directive(self) -> bool {
        matches!(
            self,
            Self::AttrBase
                | Self::Alias
                | Self::Reverse
                | Self::Reference(..)
                | Self::Flags(..)
                | Self::GridLink
                | Self::In
                | Self::On
                | Self::Describe
        )
    }
}

fn keyword(target: Target, slot: Option<Slot>) -> &'static str {
    match (target, slot) {
        (Target::Room, Some(Slot::Parent)) => "ROOM PARENT",
        (Target::Room, Some(Slot::Zone)) => "ROOM ZONE",
        (Target::Room, None) => "ROOM FLAGS",
        (Target::Exit, Some(Slot::Parent)) => "EXIT PARENT",
        (Target::Exit, Some(Slot::Zone)) => "EXIT ZONE",
        (Target::Exit, None) => "EXIT FLAGS",
    }
}

fn compile(pattern: &str) -> Regex {
    // Every pattern is a compile-time constant covered by the tests below.
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid line pattern {pattern}: {e}"))
}

/// Pattern that splits the hops off a grid-link line.
pub static HOP: LazyLock<Regex> =
    LazyLock::new(|| compile(&format!(r"\s*(<?->)\s*({LAZY_ID})")));

/// The pattern table, in priority order.
pub static RULES: LazyLock<Vec<(Rule, Regex)>> = LazyLock::new(|| {
    let mut rules = vec![
        (Rule::Blank, compile(r"^\s*$")),
        (Rule::Ignored, compile(r"^@@")),
        (Rule::Literal, compile(r"^>")),
        (Rule::Comment, compile(r"^#.*$")),
        (Rule::AttrBase, compile(r"^ATTR BASE:\s*(.*)$")),
        (Rule::Alias, compile(r#"(?i)^ALIAS\s*:?\s*(".*")\s*"(.*)"\s*$"#)),
        (Rule::Reverse, compile(r#"(?i)^REVERSE\s*:?\s*(".*")\s*(".*")\s*$"#)),
    ];

    for target in [Target::Room, Target::Exit] {
        for slot in [Slot::Parent, Slot::Zone] {
            let kw = keyword(target, Some(slot));
            rules.push((
                Rule::Reference(target, slot, RefForm::Reset),
                compile(&format!(r"^{kw}:\s*$")),
            ));
            rules.push((
                Rule::Reference(target, slot, RefForm::Raw),
                compile(&format!(r"^{kw}:\s*(#\d+)\s*$")),
            ));
            rules.push((
                Rule::Reference(target, slot, RefForm::Id),
                compile(&format!(r"^{kw}:\s*({ID})\s*$")),
            ));
        }
        let kw = keyword(target, None);
        rules.push((Rule::Flags(target, false), compile(&format!(r"^{kw}:\s*$"))));
        rules.push((
            Rule::Flags(target, true),
            compile(&format!(r"^{kw}:\s*(.+?)\s*$")),
        ));
    }

    rules.extend([
        (
            Rule::GridLink,
            compile(&format!(
                r"^({LAZY_ID})\s*:\s*(({LAZY_ID})(\s*(<?->)\s*({LAZY_ID}))+)\s*$"
            )),
        ),
        (Rule::In, compile(&format!(r"^IN\s+({ID})\s*$"))),
        (
            Rule::On,
            compile(&format!(r#"^ON\s+(".*")\s+FROM\s+({ID})\s*$"#)),
        ),
        (Rule::EndIn, compile(r"^ENDIN\s*$")),
        (Rule::EndOn, compile(r"^ENDON\s*$")),
        (
            Rule::Describe,
            compile(&format!(r"^DESC(?:RIBE)?\s+({DESC_ID})\s*=\s*(.*)$")),
        ),
        (Rule::Anything, compile(r"^.+$")),
    ]);
    rules
});
