//! # Elliptical Cylinder Rasterizer
//!
//! Enumerates lattice points inside an ellipse extruded along one axis.

use glam::DVec3;

use crate::axis::Axis;
use crate::error::GenError;
use crate::sweep::{unit_range, UpperBound};
use crate::PointSequence;

/// Rasterizes an elliptical cylinder.
///
/// Sweeps `h` over `[0, height]`, `i` over `[-half_length, half_length]`
/// and `j` over `[-half_width, half_width]`, all inclusive, and keeps
/// points strictly inside the ellipse:
/// `i²/half_length² + j²/half_width² < 1`. Boundary points are excluded,
/// unlike the disk's outer bound.
///
/// Output packing per facing: `x` -> `(h, i, j)`, `y` -> `(i, j, h)`,
/// `z` -> `(i, h, j)`.
///
/// An unrecognized facing token yields an empty sequence rather than an
/// error; the disk rasterizer fails instead, and existing callers observe
/// both behaviors, so they stay distinct.
pub fn ellipse(
    half_width: f64,
    half_length: f64,
    height: f64,
    facing: &str,
) -> Result<PointSequence, GenError> {
    let mut points = PointSequence::new();
    let Some(axis) = Axis::parse(facing) else {
        return Ok(points);
    };

    let length_sq = half_length * half_length;
    let width_sq = half_width * half_width;
    for h in unit_range(0.0, height, UpperBound::Inclusive) {
        for i in unit_range(-half_length, half_length, UpperBound::Inclusive) {
            for j in unit_range(-half_width, half_width, UpperBound::Inclusive) {
                if (i * i) / length_sq + (j * j) / width_sq < 1.0 {
                    points.push(match axis {
                        Axis::X => DVec3::new(h, i, j),
                        Axis::Y => DVec3::new(i, j, h),
                        Axis::Z => DVec3::new(i, h, j),
                    });
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
    fn test_strict_interior_only() {
        let (half_width, half_length) = (3.0, 5.0);
        let points = ellipse(half_width, half_length, 0.0, "z").unwrap();
        assert!(!points.is_empty());
        for p in &points {
            // Facing z packs (i, h, j).
            let value = (p.x * p.x) / (half_length * half_length)
                + (p.z * p.z) / (half_width * half_width);
            assert!(value < 1.0, "boundary point leaked: {:?}", p);
        }
        // The semi-axis endpoints sit exactly on the boundary and are excluded.
        assert!(!points.contains(&DVec3::new(5.0, 0.0, 0.0)));
        assert!(!points.contains(&DVec3::new(0.0, 0.0, 3.0)));
    }

    #[test]
    fn test_circular_cross_section_count() {
        // half_width == half_length == 2: strict interior of a radius-2
        // circle holds the 3x3 block around the origin.
        let points = ellipse(2.0, 2.0, 0.0, "z").unwrap();
        assert_eq!(points.len(), 9);
    }

    #[test]
    fn test_facing_packings_differ() {
        let x_points = ellipse(2.0, 3.0, 1.0, "x").unwrap();
        let y_points = ellipse(2.0, 3.0, 1.0, "y").unwrap();
        let z_points = ellipse(2.0, 3.0, 1.0, "z").unwrap();
        assert_eq!(x_points.len(), y_points.len());
        assert_eq!(y_points.len(), z_points.len());

        // Same scalar sweep, different packing of (h, i, j) per facing.
        for ((px, py), pz) in x_points.iter().zip(&y_points).zip(&z_points) {
            let (h, i, j) = (px.x, px.y, px.z);
            assert_eq!(*py, DVec3::new(i, j, h));
            assert_eq!(*pz, DVec3::new(i, h, j));
        }
    }

    #[test]
    fn test_unknown_facing_yields_empty() {
        // Unlike the disk rasterizer, an unknown token is not an error here.
        let points = ellipse(2.0, 3.0, 1.0, "diagonal").unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn test_height_layers() {
        let flat = ellipse(2.0, 2.0, 0.0, "z").unwrap();
        let tall = ellipse(2.0, 2.0, 3.0, "z").unwrap();
        assert_eq!(tall.len(), flat.len() * 4);
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(
            ellipse(4.0, 6.0, 2.0, "y").unwrap(),
            ellipse(4.0, 6.0, 2.0, "y").unwrap()
        );
    }
}
