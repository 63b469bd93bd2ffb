//! Integration tests for Layer 0: Foundation
//!
//! Tests for errors, diagnostics, identifiers, and the escaping tables.

mod errors;
mod escaping;
mod identifiers;
