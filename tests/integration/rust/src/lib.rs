//! Integration test suite for conversely
//!
//! This crate provides integration tests that verify the value model, the
//! conversion library and the CLI runtime work together across component
//! boundaries.

/// Re-export components for test convenience
pub mod components {
    pub use conversely_cli;
    pub use conversion;
    pub use core_types;
}
