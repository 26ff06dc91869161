//! # Torus Rasterizer
//!
//! Enumerates lattice points inside a torus of major radius `R` and minor
//! radius `r`, oriented along one axis.

use glam::DVec3;

use crate::axis::Axis;
use crate::error::GenError;
use crate::sweep::{unit_range, UpperBound};
use crate::PointSequence;

/// Rasterizes a torus.
///
/// # Algorithm
///
/// Sweeps `x` and `y` over the half-open range `[-(R + r), R + r)`. The
/// column at `x = y = 0` is skipped: its planar distance is zero and the
/// nearest ring point is undefined there. Every other `(x, y)` is
/// projected radially onto the ring of radius `R`; the squared deviation
/// from the ring plus `z²` must stay within `r²` for the point to be
/// kept, with `z` swept over the same half-open range.
///
/// Output packing per facing: `x` -> `(y, x, z)`, `y` -> `(x, y, z)`,
/// `z` -> `(x, z, y)`. The permutations re-orient the same scalar field
/// without recomputing it, so they are kept exactly.
///
/// An unrecognized facing token yields an empty sequence, matching the
/// elliptical cylinder rather than the disk.
pub fn torus(major_radius: f64, minor_radius: f64, facing: &str) -> Result<PointSequence, GenError> {
    let mut points = PointSequence::new();
    let Some(axis) = Axis::parse(facing) else {
        return Ok(points);
    };

    let reach = major_radius + minor_radius;
    let tube = minor_radius * minor_radius;
    for x in unit_range(-reach, reach, UpperBound::Exclusive) {
        for y in unit_range(-reach, reach, UpperBound::Exclusive) {
            let planar = (x * x + y * y).sqrt();
            if planar <= 0.0 {
                continue;
            }
            let ring_x = x / planar * major_radius;
            let ring_y = y / planar * major_radius;
            let deviation = (x - ring_x) * (x - ring_x) + (y - ring_y) * (y - ring_y);
            for z in unit_range(-reach, reach, UpperBound::Exclusive) {
                if deviation + z * z <= tube {
                    points.push(match axis {
                        Axis::X => DVec3::new(y, x, z),
                        Axis::Y => DVec3::new(x, y, z),
                        Axis::Z => DVec3::new(x, z, y),
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
