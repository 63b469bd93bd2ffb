//! Softcode generation for Quickbuild.
//!
//! This crate provides:
//! - [`generate`] / [`CodeGenerator`] - Ordered command emission over a finished grid
//! - [`EmitMode`] / [`ModeFlags`] - Managed, unmanaged, and no-side-effects strategies
//! - [`wrap`] - Comment wrapping for the output preamble
//!
//! # Modes
//!
//! | mode | objects | parents and zones |
//! |---|---|---|
//! | managed | reused if already recorded, else created | `think parent(...)` through the stored reference |
//! | unmanaged | always created | `@parent` / `@chzone` |
//! | no-side-effects | always created, commands only | `@parent` / `@chzone` |

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod generator;
pub mod mode;
pub mod wrap;

pub use generator::{CodeGenerator, Generated, VERSION, generate};
pub use mode::{EmitMode, ModeFlags};
