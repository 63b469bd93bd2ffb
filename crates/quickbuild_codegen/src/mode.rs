//! Emission modes.

use std::fmt;

use quickbuild_foundation::{Error, Result};

/// How generated commands create and wire objects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EmitMode {
    /// Reuse objects already recorded on the builder, create the rest.
    /// Safe to upload repeatedly.
    #[default]
    Managed,
    /// Always create fresh objects.
    Unmanaged,
    /// Always create fresh objects using commands only, no side-effect functions.
    NoSideEffects,
}

impl EmitMode {
    /// Returns true if the mode looks objects up before creating them.
    #[must_use]
    pub fn is_managed(self) -> bool {
        self == Self::Managed
    }
}

impl fmt::Display for EmitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Managed => f.write_str("managed"),
            Self::Unmanaged => f.write_str("unmanaged"),
            Self::NoSideEffects => f.write_str("no-side-effects"),
        }
    }
}

/// Mode switches as requested by the user, before validation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModeFlags {
    /// Managed mode was asked for explicitly.
    pub managed: bool,
    /// Unmanaged mode was asked for.
    pub unmanaged: bool,
    /// No-side-effects mode was asked for.
    pub no_side_effects: bool,
}

impl ModeFlags {
    /// Resolves the switches to a single mode.
    ///
    /// No-side-effects implies unmanaged. Nothing requested means managed.
    ///
    /// # Errors
    /// Returns [`ErrorKind::InvalidMode`](quickbuild_foundation::ErrorKind::InvalidMode)
    /// if managed mode is combined with either of the others.
    pub fn resolve(self) -> Result<EmitMode> {
        match (self.managed, self.unmanaged, self.no_side_effects) {
            (true, _, true) => Err(Error::invalid_mode(
                "cannot use managed mode with no-side-effects mode",
            )),
            (true, true, false) => Err(Error::invalid_mode(
                "cannot use managed and unmanaged mode together",
            )),
            (_, _, true) => Ok(EmitMode::NoSideEffects),
            (_, true, false) => Ok(EmitMode::Unmanaged),
            (_, false, false) => Ok(EmitMode::Managed),
        }
    }
}
