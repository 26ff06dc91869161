//! # Line Sampler
//!
//! Produces evenly spaced points along the segment between two points.

use config::constants::EPSILON;
use glam::DVec3;

use crate::error::GenError;
use crate::PointSequence;

/// Samples a segment at roughly unit spacing.
///
/// The parameter step is the reciprocal of the segment length, so a
/// segment of length `L` yields approximately `L + 1` points starting at
/// `begin`. Floating accumulation means the final sample is near, but not
/// guaranteed to be exactly, `end` — this is a sampling approximation,
/// not an endpoint-inclusive contract.
///
/// # Errors
///
/// [`GenError::DegenerateSegment`] when `begin` and `end` coincide (the
/// step size is undefined at zero length).
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use voxel_gen::line;
///
/// let points = line(DVec3::ZERO, DVec3::new(3.0, 0.0, 0.0)).unwrap();
/// assert_eq!(points[0], DVec3::ZERO);
/// ```
pub fn line(begin: DVec3, end: DVec3) -> Result<PointSequence, GenError> {
    let delta = end - begin;
    let length = delta.length();
    if length <= EPSILON {
        return Err(GenError::DegenerateSegment);
    }

    let step = 1.0 / length;
    let mut points = PointSequence::new();
    let mut t = 0.0;
    while t <= 1.0 {
        points.push(begin + delta * t);
        t += step;
    }
    Ok(points)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_axis_aligned_segment() {
        let points = line(DVec3::ZERO, DVec3::new(3.0, 0.0, 0.0)).unwrap();
        assert_eq!(points.len(), 4);
        assert_eq!(points[0], DVec3::ZERO);

        // Monotonically non-decreasing along the segment direction.
        for pair in points.windows(2) {
            assert!(pair[1].x >= pair[0].x);
        }
        assert_relative_eq!(points[3].x, 3.0, max_relative = 1e-9);
    }

    #[test]
    fn test_diagonal_segment_spacing() {
        // 3-4-5 triangle: length 5, roughly unit spacing.
        let points = line(DVec3::ZERO, DVec3::new(0.0, 3.0, 4.0)).unwrap();
        assert!((5..=6).contains(&points.len()), "got {}", points.len());
        for pair in points.windows(2) {
            assert_relative_eq!(pair[0].distance(pair[1]), 1.0, max_relative = 1e-9);
        }
    }

    #[test]
    fn test_start_point_always_included() {
        let begin = DVec3::new(-1.5, 2.0, 7.0);
        let points = line(begin, DVec3::new(4.0, -3.0, 0.5)).unwrap();
        assert_eq!(points[0], begin);
    }

    #[test]
    fn test_degenerate_segment_fails() {
        let p = DVec3::new(1.0, 2.0, 3.0);
        assert_eq!(line(p, p), Err(GenError::DegenerateSegment));
    }

    #[test]
    fn test_short_segment_yields_endpoints_only() {
        // Length 1: samples at t = 0 and t = 1.
        let points = line(DVec3::ZERO, DVec3::new(0.0, 1.0, 0.0)).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0], DVec3::ZERO);
        assert_eq!(points[1], DVec3::new(0.0, 1.0, 0.0));
    }
}
