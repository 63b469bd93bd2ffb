//! Source location tracking.
//!
//! `Location` ties every directive, warning, and error back to the file and
//! line it came from so diagnostics can point at the offending input.

use std::fmt;
use std::sync::Arc;

/// A position in a grid source file.
///
/// Grid sources are strictly line oriented, so a location is just the file
/// name and a 1-based line number.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Location {
    /// Name of the source file (or a pseudo-name such as `<stdin>`).
    pub file: Arc<str>,
    /// 1-based line number.
    pub line: u32,
}

impl Location {
    /// Creates a new location.
    #[must_use]
    pub fn new(file: impl Into<Arc<str>>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "File '{}' Line {}", self.file, self.line)
    }
}
