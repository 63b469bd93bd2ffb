//! Room and exit identifiers.
//!
//! An identifier is written in source as a quoted name, optionally followed by
//! a suffix glued to the closing quote (`"Hall"2`) so that two rooms may share
//! a display name. The full source text is the identity; the display name and
//! the attribute-safe id are derived from it.

use std::fmt;

use crate::escape::escape_attr;

/// A quoted identifier exactly as it appeared in source.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier(String);

impl Identifier {
    /// Wraps source text as an identifier.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the source text, quotes included.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the human readable name: the text between the first and last quote.
    ///
    /// Text without a closing quote is returned unchanged.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match (self.0.find('"'), self.0.rfind('"')) {
            (Some(open), Some(close)) if close > open => &self.0[open + 1..close],
            _ => &self.0,
        }
    }

    /// Returns the attribute-safe id used to store this object's reference.
    #[must_use]
    pub fn attr_id(&self) -> String {
        let trimmed = self.0.strip_prefix('"').unwrap_or(&self.0);
        let trimmed = trimmed.strip_suffix('"').unwrap_or(trimmed);
        escape_attr(trimmed)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Identifier {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// How a parent or zone reference is resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RefKind {
    /// A literal database reference (`#123`) passed through untouched.
    Raw,
    /// An identifier resolved through the grid, possibly via a placeholder.
    ById,
}

/// A parent or zone reference.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ObjectRef {
    /// The dbref text (for [`RefKind::Raw`]) or identifier text (for [`RefKind::ById`]).
    pub target: String,
    /// How to resolve `target`.
    pub kind: RefKind,
}

impl ObjectRef {
    /// Creates a raw dbref reference.
    #[must_use]
    pub fn raw(dbref: impl Into<String>) -> Self {
        Self {
            target: dbref.into(),
            kind: RefKind::Raw,
        }
    }

    /// Creates a reference to an identifier in the grid.
    #[must_use]
    pub fn by_id(id: &Identifier) -> Self {
        Self {
            target: id.as_str().to_string(),
            kind: RefKind::ById,
        }
    }

    /// Returns the target as an identifier when this is an id reference.
    #[must_use]
    pub fn identifier(&self) -> Option<Identifier> {
        match self.kind {
            RefKind::ById => Some(Identifier::new(self.target.clone())),
            RefKind::Raw => None,
        }
    }
}
