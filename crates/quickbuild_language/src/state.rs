//! Classifier state.

use std::fmt;

use quickbuild_foundation::Identifier;

/// Where the classifier is in the source.
///
/// `Error` is terminal: once entered, no further directives are produced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ParserState {
    /// Outside any block; lines are directives.
    #[default]
    Default,
    /// Inside `IN "<room>" ... ENDIN`; lines are room code.
    InRoom(Identifier),
    /// Inside `ON "<exit>" FROM "<room>" ... ENDON`; lines are exit code.
    OnExit {
        /// The room the exit leaves from.
        room: Identifier,
        /// The exit being coded.
        exit: Identifier,
    },
    /// A fatal line was seen.
    Error,
}

impl ParserState {
    /// Returns true inside an `IN` or `ON` block.
    #[must_use]
    pub fn in_block(&self) -> bool {
        matches!(self, Self::InRoom(_) | Self::OnExit { .. })
    }
}

impl fmt::Display for ParserState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("DEFAULT"),
            Self::InRoom(_) => f.write_str("IN"),
            Self::OnExit { .. } => f.write_str("ON"),
            Self::Error => f.write_str("ERROR"),
        }
    }
}
