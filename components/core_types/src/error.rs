//! Accessor failure types.
//!
//! Caller-supplied accessors (functions, `valueOf`/`toString`-style methods,
//! primitive hints) report failure through [`AccessorError`]. The conversion
//! pipeline captures these and never hands them back to its own caller.

use thiserror::Error;

use crate::Value;

/// Why a caller-supplied accessor produced no value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessorError {
    /// The accessor reported an error (the host equivalent of a thrown exception)
    #[error("accessor threw: {0}")]
    Thrown(String),
    /// The accessor panicked while being invoked
    #[error("accessor panicked: {0}")]
    Panicked(String),
}

impl AccessorError {
    /// Create a `Thrown` error from any message
    pub fn thrown(message: impl Into<String>) -> Self {
        AccessorError::Thrown(message.into())
    }
}

/// Result of invoking an accessor once.
pub type AccessorResult = Result<Value, AccessorError>;
