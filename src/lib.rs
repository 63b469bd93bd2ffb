//! Quickbuild - MUSH grid compiler
//!
//! This crate re-exports all layers of the Quickbuild system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: quickbuild_runtime     - CLI, options, source loading, sessions
//! Layer 3: quickbuild_codegen     - Emission modes, softcode generation
//! Layer 2: quickbuild_grid        - Grid graph, builder, exit naming
//! Layer 1: quickbuild_language    - Directives, line classifier
//! Layer 0: quickbuild_foundation  - Errors, diagnostics, identifiers, escaping
//! ```

pub use quickbuild_codegen as codegen;
pub use quickbuild_foundation as foundation;
pub use quickbuild_grid as grid;
pub use quickbuild_language as language;
pub use quickbuild_runtime as runtime;
