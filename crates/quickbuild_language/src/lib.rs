//! Line classifier for the Quickbuild grid language.
//!
//! This crate provides:
//! - [`LineClassifier`] - Tri-state line parser (default / `IN` block / `ON` block)
//! - [`Directive`] / [`Payload`] - Typed instructions tagged with file and line
//! - [`ParserState`] - Classifier state
//! - [`rules`] - The ordered line pattern table
//!
//! Multiple sources are classified independently and concatenated in order,
//! so a directive in one file can refer forward to rooms built in a later one.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod classifier;
pub mod directive;
pub mod rules;
pub mod state;

pub use classifier::{LineClassifier, buffer_prefix};
pub use directive::{Directive, Payload};
pub use state::ParserState;


/// Classifies several named sources into one ordered directive stream.
///
/// Each source gets a fresh classifier, so an unterminated block does not leak
/// into the next file.
#[must_use]
pub fn classify_sources<'a, I>(sources: I) -> Vec<Directive>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    sources
        .into_iter()
        .flat_map(|(file, text)| LineClassifier::classify_source(file, text))
        .collect()
}
