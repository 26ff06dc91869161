//! # Configuration Constants
//!
//! Centralized constants for the voxel generation pipeline.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Axis Tokens**: Canonical facing token spellings

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance, and by the line sampler to detect a zero-length
/// segment before computing the reciprocal step size.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// AXIS TOKENS
// =============================================================================

/// Canonical token selecting the physical x axis as a shape's facing.
pub const AXIS_X: &str = "x";

/// Canonical token selecting the physical y axis as a shape's facing.
pub const AXIS_Y: &str = "y";

/// Canonical token selecting the physical z axis as a shape's facing.
///
/// # Example
///
/// ```rust
/// use config::constants::{AXIS_X, AXIS_Y, AXIS_Z};
///
/// let tokens = [AXIS_X, AXIS_Y, AXIS_Z];
/// assert_eq!(tokens, ["x", "y", "z"]);
/// ```
pub const AXIS_Z: &str = "z";
