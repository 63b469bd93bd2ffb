//! Compilation sessions.
//!
//! A session runs the full pipeline over an ordered list of sources:
//! classify every source, build one grid from the concatenated directives,
//! then generate commands. The first fatal error stops the run and no
//! commands are returned.

use quickbuild_codegen::generate;
use quickbuild_foundation::{Diagnostics, Result};
use quickbuild_grid::{Grid, build};
use quickbuild_language::{Directive, classify_sources};

use crate::config::CompileOptions;
use crate::source::SourceFile;

/// Output of a successful compilation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Compilation {
    /// Commands in upload order.
    pub commands: Vec<String>,
    /// Every warning raised, in the order it was raised.
    pub diagnostics: Diagnostics,
}

/// A compilation session with fixed options.
#[derive(Clone, Debug, Default)]
pub struct Session {
    options: CompileOptions,
}

impl Session {
    /// Creates a session.
    #[must_use]
    pub fn new(options: CompileOptions) -> Self {
        Self { options }
    }

    /// Returns the session options.
    #[must_use]
    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    /// Classifies the sources into one directive stream.
    #[must_use]
    pub fn classify(&self, sources: &[SourceFile]) -> Vec<Directive> {
        classify_sources(
            sources
                .iter()
                .map(|source| (source.name.as_str(), source.text.as_str())),
        )
    }

    /// Classifies and builds, stopping before generation.
    ///
    /// # Errors
    /// Returns the first fatal error raised while building.
    pub fn build(&self, sources: &[SourceFile]) -> Result<(Grid, Diagnostics)> {
        let directives = self.classify(sources);
        tracing::debug!(
            sources = sources.len(),
            directives = directives.len(),
            "classified"
        );
        build(&directives, self.options.build)
    }

    /// Runs the full pipeline.
    ///
    /// # Errors
    /// Returns the first fatal error raised by any stage.
    pub fn compile(&self, sources: &[SourceFile]) -> Result<Compilation> {
        let (grid, mut diagnostics) = self.build(sources)?;
        tracing::debug!(
            rooms = grid.room_count(),
            exits = grid.edge_count(),
            "built grid"
        );
        let generated = generate(grid, self.options.mode)?;
        diagnostics.extend(generated.diagnostics);
        Ok(Compilation {
            commands: generated.commands,
            diagnostics,
        })
    }

    /// Compiles a single in-memory source.
    ///
    /// # Errors
    /// Returns the first fatal error raised by any stage.
    pub fn compile_str(&self, name: &str, text: &str) -> Result<Compilation> {
        self.compile(&[SourceFile::new(name, text)])
    }
}
