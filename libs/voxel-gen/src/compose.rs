//! # Composition Combinator
//!
//! Applies a point-transform function across a point sequence.

use crate::error::GenError;
use crate::{Point3, PointSequence};
use voxel_value::Value;

/// Maps a transform over a point slice, preserving order and length.
///
/// This is the typed form of the combinator for Rust callers.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use voxel_gen::map_points;
///
/// let shifted = map_points(|p| p + DVec3::Y, &[DVec3::ZERO]);
/// assert_eq!(shifted, vec![DVec3::Y]);
/// ```
pub fn map_points<F>(transform: F, points: &[Point3]) -> PointSequence
where
    F: Fn(Point3) -> Point3,
{
    points.iter().map(|&p| transform(p)).collect()
}

/// Host-facing combinator over dynamic values.
///
/// The first operand must be a callable ([`Value::Func`]), the second a
/// list whose elements all convert to points. Order and length of the
/// input list are preserved in the output sequence.
///
/// # Errors
///
/// [`GenError::InvalidOperands`] when the first operand is not callable,
/// the second is not a list, or a list element is not a point.
pub fn composition(transform: &Value, points: &Value) -> Result<PointSequence, GenError> {
    let Value::Func(f) = transform else {
        return Err(GenError::InvalidOperands(format!(
            "expected a function, got {}",
            transform.type_name()
        )));
    };
    let Value::List(items) = points else {
        return Err(GenError::InvalidOperands(format!(
            "expected a list of points, got {}",
            points.type_name()
        )));
    };

    let mut out = PointSequence::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let point = item.as_point3().ok_or_else(|| {
            GenError::InvalidOperands(format!(
                "element {} is not a point, got {}",
                index,
                item.type_name()
            ))
        })?;
        out.push(f(point));
    }
    Ok(out)
}

// =============================================================================
// TESTS
// =============================================================================
