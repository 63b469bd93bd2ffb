//! Configuration for a compilation run.

use quickbuild_codegen::{EmitMode, ModeFlags};
use quickbuild_foundation::Result;
use quickbuild_grid::{BuildOptions, NamingOptions};

/// Options for one compilation run.
///
/// Controls exit naming, reverse registration, and the emission mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CompileOptions {
    /// Graph building switches.
    pub build: BuildOptions,

    /// How generated commands create objects.
    pub mode: EmitMode,
}

impl CompileOptions {
    /// Creates options resolving the requested mode switches.
    ///
    /// # Errors
    /// Returns an error if the mode switches conflict.
    pub fn from_flags(build: BuildOptions, flags: ModeFlags) -> Result<Self> {
        Ok(Self {
            build,
            mode: flags.resolve()?,
        })
    }

    /// Creates options for a fresh area with no reuse of existing objects.
    #[must_use]
    pub fn unmanaged() -> Self {
        Self {
            mode: EmitMode::Unmanaged,
            ..Self::default()
        }
    }

    /// Creates options for servers without side-effect functions.
    #[must_use]
    pub fn no_side_effects() -> Self {
        Self {
            mode: EmitMode::NoSideEffects,
            ..Self::default()
        }
    }

    /// Builder method to set the emission mode.
    #[must_use]
    pub fn with_mode(mut self, mode: EmitMode) -> Self {
        self.mode = mode;
        self
    }

    /// Builder method to toggle `<b>racket` alias detection.
    #[must_use]
    pub fn with_detect_brackets(mut self, detect: bool) -> Self {
        self.build.naming = self.build.naming.with_detect_brackets(detect);
        self
    }

    /// Builder method to toggle auto-bracketing of unmarked exit names.
    #[must_use]
    pub fn with_auto_brackets(mut self, auto: bool) -> Self {
        self.build.naming = self.build.naming.with_auto_brackets(auto);
        self
    }

    /// Builder method to toggle two-way `REVERSE` registration.
    #[must_use]
    pub fn with_bidirectional_reverse(mut self, enabled: bool) -> Self {
        self.build = self.build.with_bidirectional_reverse(enabled);
        self
    }

    /// Returns the exit naming switches.
    #[must_use]
    pub fn naming(&self) -> NamingOptions {
        self.build.naming
    }
}
