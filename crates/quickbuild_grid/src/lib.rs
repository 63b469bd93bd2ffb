//! Grid graph construction for Quickbuild.
//!
//! This crate provides:
//! - [`Grid`] / [`Room`] / [`Exit`] - The room/exit graph
//! - [`GridBuilder`] - Folds classified directives into a grid
//! - [`BuildContext`] - Attribute base, alias and reverse tables, sticky defaults
//! - [`naming`] - Exit alias derivation
//!
//! # Forward references
//!
//! A `ROOM PARENT:` or `ZONE:` line may name a room that has not been built
//! yet. The reference is parked as a [`Placeholder`] that collects any code
//! aimed at it. If the room is built later the code moves into it; otherwise
//! [`Grid::promote_placeholders`] turns it into a proxy thing at generation time.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod builder;
pub mod context;
pub mod grid;
pub mod naming;

pub use builder::{BuildOptions, GridBuilder, build};
pub use context::{BuildContext, DEFAULT_ATTR_BASE, Sticky};
pub use grid::{Exit, Grid, PendingKind, PendingRef, Placeholder, Promotion, Room, RoomKind};
pub use naming::{NamingOptions, exit_name, short_form};
