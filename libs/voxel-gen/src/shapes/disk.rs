//! # Disk/Cylinder Rasterizer
//!
//! Enumerates lattice points inside an annulus extruded along one axis.

use glam::DVec3;

use crate::axis::Axis;
use crate::error::GenError;
use crate::sweep::{unit_range, UpperBound};
use crate::PointSequence;

/// Rasterizes an annulus extruded along the facing axis.
///
/// # Arguments
///
/// * `radius` - Outer radius of the annulus
/// * `inner_radius` - Ring thickness measured inward from `radius`; the
///   shape degenerates to a filled disk when `inner_radius == radius`
/// * `height` - Extrusion height; one layer per unit step, endpoints
///   included
/// * `facing` - Facing token (`"x"`, `"y"` or `"z"`)
///
/// # Algorithm
///
/// Sweeps `h` over `[0, height]`, then `x` and `y` over `[-radius, radius]`
/// in unit steps. A point is kept when `x² + y² < radius²` and
/// `x² + y² >= (radius - inner_radius)²` (strict outer bound, non-strict
/// inner bound). The `y` sweep's upper bound is exclusive for facing `x`
/// and inclusive for `y`/`z`; existing consumers observe that asymmetry,
/// so it is kept.
///
/// Output packing per facing: `x` -> `(h, x, y)`, `y` -> `(x, h, y)`,
/// `z` -> `(h, x, y)`. Facings `x` and `z` share a packing; callers
/// depend on the emitted coordinates, so the sharing is kept as-is.
///
/// # Errors
///
/// [`GenError::InvalidAxis`] for an unrecognized facing token.
///
/// # Example
///
/// ```rust
/// use voxel_gen::disk;
///
/// let points = disk(2.0, 2.0, 0.0, "y").unwrap();
/// assert!(points.iter().all(|p| p.x * p.x + p.z * p.z < 4.0));
/// ```
pub fn disk(
    radius: f64,
    inner_radius: f64,
    height: f64,
    facing: &str,
) -> Result<PointSequence, GenError> {
    let axis = Axis::parse(facing).ok_or_else(|| GenError::InvalidAxis(facing.to_string()))?;

    let outer = radius * radius;
    let hole = (radius - inner_radius) * (radius - inner_radius);
    let y_upper = match axis {
        Axis::X => UpperBound::Exclusive,
        Axis::Y | Axis::Z => UpperBound::Inclusive,
    };

    let mut points = PointSequence::new();
    for h in unit_range(0.0, height, UpperBound::Inclusive) {
        for x in unit_range(-radius, radius, UpperBound::Inclusive) {
            for y in unit_range(-radius, radius, y_upper) {
                let planar = x * x + y * y;
                if planar < outer && planar >= hole {
                    points.push(match axis {
                        Axis::X | Axis::Z => DVec3::new(h, x, y),
                        Axis::Y => DVec3::new(x, h, y),
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
