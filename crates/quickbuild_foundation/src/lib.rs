//! Core types for Quickbuild.
//!
//! This crate provides:
//! - [`Error`] - Fatal errors with source location
//! - [`Diagnostic`] / [`Diagnostics`] - Non-fatal warnings
//! - [`Location`] - File and line tracking
//! - [`Identifier`] / [`ObjectRef`] - Room, exit, parent, and zone references
//! - [`escape`] - Softcode and attribute-name escaping tables

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod diagnostic;
pub mod error;
pub mod escape;
pub mod ident;
pub mod location;

pub use diagnostic::{Diagnostic, Diagnostics};
pub use error::{Error, ErrorKind, Result};
pub use escape::{escape_attr, escape_code};
pub use ident::{Identifier, ObjectRef, RefKind};
pub use location::Location;
