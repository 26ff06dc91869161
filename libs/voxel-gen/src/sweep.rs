//! # Unit-Step Sweeps
//!
//! Bounded unit-step ranges over real-valued endpoints. The rasterizers
//! sweep from a (possibly fractional) start in steps of exactly one; the
//! iterator is counter-based so repeated addition cannot drift.

/// Whether a sweep's upper bound is part of the range.
///
/// The disk rasterizer's secondary sweep is exclusive for one facing and
/// inclusive for the others; both variants are therefore first-class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpperBound {
    Inclusive,
    Exclusive,
}

/// Iterates `start, start + 1, start + 2, ...` up to `end`.
///
/// With [`UpperBound::Inclusive`] the last value satisfies `v <= end`;
/// with [`UpperBound::Exclusive`] it satisfies `v < end`. An empty range
/// is produced when `end` lies below `start`.
///
/// # Example
///
/// ```rust
/// use voxel_gen::sweep::{unit_range, UpperBound};
///
/// let values: Vec<f64> = unit_range(-2.5, 2.5, UpperBound::Inclusive).collect();
/// assert_eq!(values, vec![-2.5, -1.5, -0.5, 0.5, 1.5, 2.5]);
/// ```
pub fn unit_range(start: f64, end: f64, upper: UpperBound) -> impl Iterator<Item = f64> {
    let span = end - start;
    let count = match upper {
        UpperBound::Inclusive => span.floor() as i64 + 1,
        UpperBound::Exclusive => span.ceil() as i64,
    };
    (0..count.max(0)).map(move |k| start + k as f64)
}

// =============================================================================
// TESTS
// =============================================================================
