use crate::geometry::surface::Plane;

use super::{Point3, Vector3};

/// Signed distance from a point to a plane.
/// Positive = on the normal side, negative = opposite.
#[must_use]
pub fn signed_distance_to_plane(point: &Point3, plane: &Plane) -> f64 {
    let diff = point - plane.origin();
    plane.plane_normal().dot(&diff)
}

/// Splits `delta` into its component along `normal` and the magnitude of the
/// remaining lateral part.
///
/// `normal` must be unit length. Returns `(normal_component, lateral_magnitude)`.
#[must_use]
pub fn decompose_along(delta: &Vector3, normal: &Vector3) -> (f64, f64) {
    let along = delta.dot(normal);
    let lateral = delta - normal * along;
    (along, lateral.norm())
}

/// Angle in radians between two directions, folded into `[0, pi/2]` so that
/// opposite directions count as aligned.
#[must_use]
pub fn unsigned_angle(a: &Vector3, b: &Vector3) -> f64 {
    let angle = a.angle(b);
    angle.min(std::f64::consts::PI - angle)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn v(x: f64, y: f64, z: f64) -> Vector3 {
        Vector3::new(x, y, z)
    }

    #[test]
    fn signed_distance_sides() {
        let plane = Plane::from_normal(p(0.0, 0.0, 2.0), v(0.0, 0.0, 1.0)).unwrap();
        assert_relative_eq!(signed_distance_to_plane(&p(5.0, -3.0, 7.0), &plane), 5.0);
        assert_relative_eq!(signed_distance_to_plane(&p(1.0, 1.0, -1.0), &plane), -3.0);
        assert_relative_eq!(signed_distance_to_plane(&p(9.0, 9.0, 2.0), &plane), 0.0);
    }

    #[test]
    fn decompose_pure_offset() {
        let (along, lateral) = decompose_along(&v(0.0, 0.0, -10.0), &v(0.0, 0.0, 1.0));
        assert_relative_eq!(along, -10.0);
        assert_relative_eq!(lateral, 0.0);
    }

    #[test]
    fn decompose_with_lateral_part() {
        let (along, lateral) = decompose_along(&v(3.0, 4.0, 2.0), &v(0.0, 0.0, 1.0));
        assert_relative_eq!(along, 2.0);
        assert_relative_eq!(lateral, 5.0);
    }

    #[test]
    fn unsigned_angle_folds_opposites() {
        let up = v(0.0, 0.0, 1.0);
        assert_relative_eq!(unsigned_angle(&up, &v(0.0, 0.0, -1.0)), 0.0);
        assert_relative_eq!(unsigned_angle(&up, &up), 0.0);
        assert_relative_eq!(
            unsigned_angle(&up, &v(0.0, 1.0, 1.0)),
            std::f64::consts::FRAC_PI_4,
            epsilon = 1e-12
        );
    }
}
