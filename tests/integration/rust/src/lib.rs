//! Integration test suite for the jsast workspace
//!
//! This crate provides integration tests that verify the scanner, parser
//! and CLI driver work together across component boundaries.

/// Re-export components for test convenience
pub mod components {
    pub use core_types;
    pub use js_cli;
    pub use parser;
}
