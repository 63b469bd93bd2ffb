//! CLI support and compilation sessions for Quickbuild.
//!
//! This crate provides:
//! - [`Session`] - Runs the classify, build, generate pipeline over ordered sources
//! - [`CompileOptions`] - Naming, reverse, and emission mode settings
//! - [`SourceFile`] / [`ConfigSource`] - Input and configuration file loading

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod session;
pub mod source;

pub use config::CompileOptions;
pub use session::{Compilation, Session};
pub use source::{ConfigSource, SourceFile, default_config_candidates};
