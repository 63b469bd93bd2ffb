//! Typed directives produced by the line classifier.

use quickbuild_foundation::{Identifier, Location, ObjectRef};

/// One classified instruction, tagged with the line that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Directive {
    /// Source file and line.
    pub location: Location,
    /// What the line asks for.
    pub payload: Payload,
}

impl Directive {
    /// Creates a directive.
    #[must_use]
    pub fn new(location: Location, payload: Payload) -> Self {
        Self { location, payload }
    }
}

/// The instruction carried by a [`Directive`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Payload {
    /// Nothing to do (blank lines, comments, block delimiters).
    Nop,
    /// Fatal: abort the compilation.
    Error(String),
    /// Non-fatal: report and continue.
    Warning(String),
    /// Set the attribute base path; empty resets to the default.
    AttrBase(String),
    /// Replace an exit's generated name with an explicit name/alias list.
    Alias {
        /// The exit being aliased.
        exit: Identifier,
        /// The full `name;alias;alias` text to use instead.
        aliases: String,
    },
    /// Register the exit that leads back for two-way links.
    Reverse {
        /// The forward exit.
        exit: Identifier,
        /// The exit created in the opposite direction.
        reverse: Identifier,
    },
    /// Sticky parent for rooms created from here on; `None` resets.
    RoomParent(Option<ObjectRef>),
    /// Sticky zone for rooms created from here on; `None` resets.
    RoomZone(Option<ObjectRef>),
    /// Sticky flags for rooms created from here on; `None` resets.
    RoomFlags(Option<String>),
    /// Sticky parent for exits created from here on; `None` resets.
    ExitParent(Option<ObjectRef>),
    /// Sticky zone for exits created from here on; `None` resets.
    ExitZone(Option<ObjectRef>),
    /// Sticky flags for exits created from here on; `None` resets.
    ExitFlags(Option<String>),
    /// Create a room unless it already exists.
    CreateRoom(Identifier),
    /// Open an exit from one room to another.
    CreateExit {
        /// The exit id.
        exit: Identifier,
        /// Source room.
        from: Identifier,
        /// Destination room.
        to: Identifier,
    },
    /// Open the registered reverse of `exit`, from `to` back to `from`.
    CreateReverseExit {
        /// The forward exit id whose reverse is opened.
        exit: Identifier,
        /// Source room of the forward exit.
        from: Identifier,
        /// Destination room of the forward exit.
        to: Identifier,
    },
    /// Append inline code to a room.
    BufferRoom {
        /// The room receiving the code.
        room: Identifier,
        /// Code text, already prefixed or escaped.
        text: String,
    },
    /// Append inline code to an exit.
    BufferExit {
        /// The room the exit leaves from.
        room: Identifier,
        /// The exit receiving the code.
        exit: Identifier,
        /// Code text, already prefixed or escaped.
        text: String,
    },
}
