//! # Value Errors
//!
//! Error types for host-value coercion.

use thiserror::Error;

/// Errors that can occur while resolving host-supplied values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// A non-numeric value appeared where a number was required.
    #[error("Invalid parameter: expected an integer or real, got {found} at index {index}")]
    InvalidParameterType {
        /// Zero-based position of the offending value.
        index: usize,
        /// Type label of the value actually supplied.
        found: &'static str,
    },
}

// =============================================================================
// TESTS
// =============================================================================
