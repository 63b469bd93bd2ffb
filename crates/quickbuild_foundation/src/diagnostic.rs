//! Non-fatal diagnostics.
//!
//! Warnings never stop a compilation. Each stage collects them into a
//! [`Diagnostics`] list that travels with its output, and every warning is
//! logged through `tracing` at the moment it is recorded.

use std::fmt;

use crate::location::Location;

/// A single warning.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Where the warning was raised, if it came from a source line.
    pub location: Option<Location>,
    /// Human readable message.
    pub message: String,
}

impl Diagnostic {
    /// Creates a warning tied to a source line.
    #[must_use]
    pub fn at(location: Location, message: impl Into<String>) -> Self {
        Self {
            location: Some(location),
            message: message.into(),
        }
    }

    /// Creates a structural warning with no source line (raised during generation).
    #[must_use]
    pub fn structural(message: impl Into<String>) -> Self {
        Self {
            location: None,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(location) => write!(f, "{location}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// An ordered collection of warnings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a warning and logs it.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        tracing::warn!("{diagnostic}");
        self.items.push(diagnostic);
    }

    /// Appends every warning from another collection without logging them again.
    pub fn extend(&mut self, other: Diagnostics) {
        self.items.extend(other.items);
    }

    /// Returns the number of warnings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates the warnings in the order they were raised.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    /// Counts warnings whose message contains `needle`.
    #[must_use]
    pub fn count_matching(&self, needle: &str) -> usize {
        self.items
            .iter()
            .filter(|d| d.message.contains(needle))
            .count()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
