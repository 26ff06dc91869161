//! # Generation Errors
//!
//! Error types for shape generation operations.

use thiserror::Error;
use voxel_value::ValueError;

/// Errors that can occur during shape generation.
///
/// Every failure is returned as a value so the host can inspect and
/// translate it; no generator panics or retries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenError {
    /// Parameter coercion error from the value layer.
    #[error("Parameter error: {0}")]
    Value(#[from] ValueError),

    /// Unrecognized facing token where the generator validates it.
    #[error("Invalid axis token: {0:?}")]
    InvalidAxis(String),

    /// Semantically impossible shape.
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Zero-length line request; the step size is the reciprocal of the
    /// segment length and is undefined at zero.
    #[error("Degenerate segment: begin and end coincide")]
    DegenerateSegment,

    /// Combinator given a non-callable or non-sequence argument.
    #[error("Invalid operands: {0}")]
    InvalidOperands(String),

    /// Wrong number of arguments for a builtin.
    #[error("Wrong number of arguments for {name}: expected {expected}, got {got}")]
    WrongArgCount {
        name: &'static str,
        expected: usize,
        got: usize,
    },
}

// =============================================================================
// TESTS
// =============================================================================
