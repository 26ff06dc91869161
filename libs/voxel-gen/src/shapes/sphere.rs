//! # Sphere Rasterizer
//!
//! Enumerates lattice points inside a spherical shell. A sphere has no
//! facing parameter; orientation is irrelevant by construction.

use glam::DVec3;

use crate::error::GenError;
use crate::sweep::{unit_range, UpperBound};
use crate::PointSequence;

/// Rasterizes a spherical shell.
///
/// Sweeps `x`, `y`, `z` over the half-open range `[-radius, radius)` and
/// keeps every point with `radius² >= x² + y² + z² >= inner_radius²`.
/// `inner_radius = 0` yields a solid ball.
///
/// # Errors
///
/// [`GenError::InvalidGeometry`] when `radius < inner_radius`.
///
/// # Example
///
/// ```rust
/// use voxel_gen::sphere;
///
/// let points = sphere(3.0, 0.0).unwrap();
/// assert!(points.iter().all(|p| p.length_squared() <= 9.0));
/// ```
pub fn sphere(radius: f64, inner_radius: f64) -> Result<PointSequence, GenError> {
    if radius < inner_radius {
        return Err(GenError::InvalidGeometry(format!(
            "inner radius ({}) is larger than radius ({})",
            inner_radius, radius
        )));
    }

    let outer = radius * radius;
    let inner = inner_radius * inner_radius;
    let mut points = PointSequence::new();
    for x in unit_range(-radius, radius, UpperBound::Exclusive) {
        for y in unit_range(-radius, radius, UpperBound::Exclusive) {
            for z in unit_range(-radius, radius, UpperBound::Exclusive) {
                let dist = x * x + y * y + z * z;
                if dist <= outer && dist >= inner {
                    points.push(DVec3::new(x, y, z));
                }
            }
        }
    }
    Ok(points)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_ball_matches_brute_force_count() {
        let radius = 3.0;
        let points = sphere(radius, 0.0).unwrap();

        // Same half-open sweep and the same non-strict outer bound.
        let mut expected = 0usize;
        for x in -3i64..3 {
            for y in -3i64..3 {
                for z in -3i64..3 {
                    if ((x * x + y * y + z * z) as f64) <= radius * radius {
                        expected += 1;
                    }
                }
            }
        }
        assert_eq!(points.len(), expected);
    }

    #[test]
    fn test_sweep_order_is_outer_to_inner() {
        // The x sweep starts at -radius; the only admissible point there
        // sits exactly on the shell.
        let points = sphere(3.0, 0.0).unwrap();
        assert_eq!(points[0], DVec3::new(-3.0, 0.0, 0.0));
    }

    #[test]
    fn test_shell_excludes_interior() {
        let points = sphere(4.0, 2.0).unwrap();
        assert!(!points.is_empty());
        for p in &points {
            assert!(p.length_squared() >= 4.0, "interior point leaked: {:?}", p);
            assert!(p.length_squared() <= 16.0);
        }
    }

    #[test]
    fn test_inner_larger_than_outer_fails() {
        let err = sphere(2.0, 3.0).unwrap_err();
        assert!(matches!(err, GenError::InvalidGeometry(_)));
    }

    #[test]
    fn test_equal_radii_allowed() {
        // radius == inner_radius keeps only points exactly on the shell.
        let points = sphere(3.0, 3.0).unwrap();
        assert!(points.iter().all(|p| p.length_squared() == 9.0));
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(sphere(4.0, 1.0).unwrap(), sphere(4.0, 1.0).unwrap());
    }
}
