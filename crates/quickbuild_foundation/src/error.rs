//! Error types for the Quickbuild system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Every error is fatal: the pipeline stops at the first one and no output
//! is produced.

use thiserror::Error;

use crate::location::Location;

/// The main error type for Quickbuild operations.
#[derive(Debug, Error)]
#[error("{}{kind}", located(.location))]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Where in the grid source the error was triggered, if known.
    pub location: Option<Location>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            location: None,
        }
    }

    /// Attaches a source location to this error.
    #[must_use]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Creates an error forwarded from a classifier error directive.
    #[must_use]
    pub fn directive(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Directive(message.into()))
    }

    /// Creates a missing room error.
    #[must_use]
    pub fn room_missing(room: impl Into<String>) -> Self {
        Self::new(ErrorKind::RoomMissing(room.into()))
    }

    /// Creates a missing exit error.
    #[must_use]
    pub fn exit_missing(exit: impl Into<String>, room: impl Into<String>) -> Self {
        Self::new(ErrorKind::ExitMissing {
            exit: exit.into(),
            room: room.into(),
        })
    }

    /// Creates a duplicate exit error.
    #[must_use]
    pub fn duplicate_exit(exit: impl Into<String>, room: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateExit {
            exit: exit.into(),
            room: room.into(),
        })
    }

    /// Creates a missing reverse mapping error.
    #[must_use]
    pub fn missing_reverse(exit: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingReverse(exit.into()))
    }

    /// Creates an invalid emission mode error.
    #[must_use]
    pub fn invalid_mode(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidMode(message.into()))
    }

    /// Creates an I/O error for the given path.
    #[must_use]
    pub fn io(path: impl Into<String>, source: &std::io::Error) -> Self {
        Self::new(ErrorKind::Io {
            path: path.into(),
            message: source.to_string(),
        })
    }
}

/// Renders the `File '...' Line n: ` prefix of a located error.
#[allow(clippy::ref_option)]
fn located(location: &Option<Location>) -> String {
    location
        .as_ref()
        .map(|location| format!("{location}: "))
        .unwrap_or_default()
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ErrorKind {
    /// The classifier emitted an error directive, such as an unrecognized line.
    #[error("{0}")]
    Directive(String),

    /// A room was referenced before it was created.
    #[error("Room {0} doesn't exist")]
    RoomMissing(String),

    /// An exit was referenced before it was created.
    #[error("Exit {exit} doesn't exist in room {room}")]
    ExitMissing {
        /// The exit that was looked up.
        exit: String,
        /// The room it was looked up in.
        room: String,
    },

    /// A room already has an exit with this id.
    #[error("There is already an exit {exit} in room {room}")]
    DuplicateExit {
        /// The duplicated exit.
        exit: String,
        /// The room that already holds it.
        room: String,
    },

    /// A two-way link used an exit with no registered reverse.
    #[error("No reverse exit for {0}")]
    MissingReverse(String),

    /// Emission options that cannot be combined.
    #[error("invalid mode: {0}")]
    InvalidMode(String),

    /// A parent or zone id could not be resolved during generation.
    #[error("unresolved reference: {0}")]
    UnresolvedReference(String),

    /// Reading a source file failed.
    #[error("cannot read {path}: {message}")]
    Io {
        /// The path that failed.
        path: String,
        /// The underlying error message.
        message: String,
    },
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;
