//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_epsilon_is_small() {
    assert!(EPSILON < 1e-6, "EPSILON should be small for precision");
}

// =============================================================================
// AXIS TOKEN TESTS
// =============================================================================

#[test]
fn test_axis_tokens_are_lowercase() {
    for token in [AXIS_X, AXIS_Y, AXIS_Z] {
        assert_eq!(token, token.to_lowercase());
    }
}

#[test]
fn test_axis_tokens_are_distinct() {
    assert_ne!(AXIS_X, AXIS_Y);
    assert_ne!(AXIS_Y, AXIS_Z);
    assert_ne!(AXIS_X, AXIS_Z);
}
