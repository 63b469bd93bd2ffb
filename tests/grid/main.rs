//! Integration tests for Layer 2: Grid
//!
//! Tests for graph construction, forward references, and exit naming.

mod naming;
mod placeholders;
