use crate::error::{GeometryError, Result};

use super::{Point3, UnitVector3, Vector3, TOLERANCE};

/// Computes the unit normal of a closed polygon using Newell's method.
///
/// The polygon need not be convex; the normal follows the right-hand rule
/// with respect to the point order.
///
/// # Errors
///
/// Returns [`GeometryError::Degenerate`] if the points are collinear,
/// coincident, or fewer than three.
pub fn newell_normal(points: &[Point3]) -> Result<UnitVector3> {
    let n = points.len();
    if n < 3 {
        return Err(GeometryError::Degenerate("polygon needs at least 3 points".into()).into());
    }
    let mut normal = Vector3::zeros();
    for i in 0..n {
        let curr = &points[i];
        let next = &points[(i + 1) % n];
        normal.x += (curr.y - next.y) * (curr.z + next.z);
        normal.y += (curr.z - next.z) * (curr.x + next.x);
        normal.z += (curr.x - next.x) * (curr.y + next.y);
    }
    UnitVector3::try_new(normal, TOLERANCE).ok_or_else(|| {
        GeometryError::Degenerate("polygon has no area: cannot compute normal".into()).into()
    })
}
