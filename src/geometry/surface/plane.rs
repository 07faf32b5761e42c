use crate::error::{GeometryError, Result};
use crate::math::{Point3, UnitVector3, Vector3, TOLERANCE};

use super::{Surface, SurfaceDomain};

/// An infinite plane in 3D space.
///
/// Defined by an origin point and two orthonormal direction vectors
/// (`u_dir`, `v_dir`). The normal is `u_dir × v_dir`.
///
/// Parametric form: `P(u, v) = origin + u * u_dir + v * v_dir`, so the
/// parametric origin `P(0, 0)` is the plane's own origin.
#[derive(Debug, Clone)]
pub struct Plane {
    origin: Point3,
    u_dir: Vector3,
    v_dir: Vector3,
    normal: UnitVector3,
}

impl Plane {
    /// Creates a plane from an origin, a normal and a direction that should
    /// become `u_dir`.
    ///
    /// `u_hint` is projected into the plane; the result is right-handed
    /// (`u_dir × v_dir = normal`).
    ///
    /// # Errors
    ///
    /// Returns an error if the normal is zero-length or `u_hint` is
    /// (anti-)parallel to it.
    pub fn new(origin: Point3, normal: Vector3, u_hint: Vector3) -> Result<Self> {
        let normal = UnitVector3::try_new(normal, TOLERANCE).ok_or(GeometryError::ZeroVector)?;
        let in_plane = u_hint - normal.into_inner() * u_hint.dot(&*normal);
        let u_dir = in_plane.try_normalize(TOLERANCE).ok_or_else(|| {
            GeometryError::Degenerate("u direction is parallel to the plane normal".into())
        })?;
        let v_dir = normal.cross(&u_dir);
        Ok(Self {
            origin,
            u_dir,
            v_dir,
            normal,
        })
    }

    /// Creates a plane from an origin and a normal vector.
    ///
    /// The U and V directions are computed automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if the normal vector is zero-length.
    pub fn from_normal(origin: Point3, normal: Vector3) -> Result<Self> {
        let len = normal.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        // Any reference vector not parallel to the normal will do.
        let reference = if (normal.x / len).abs() < 0.9 {
            Vector3::x()
        } else {
            Vector3::y()
        };
        Self::new(origin, normal, reference)
    }

    /// Returns the plane moved by `distance` along its normal.
    #[must_use]
    pub fn offset(&self, distance: f64) -> Self {
        Self {
            origin: self.origin + self.normal.into_inner() * distance,
            ..self.clone()
        }
    }

    /// Returns the origin point of the plane.
    #[must_use]
    pub fn origin(&self) -> &Point3 {
        &self.origin
    }

    /// Returns the U direction vector.
    #[must_use]
    pub fn u_dir(&self) -> &Vector3 {
        &self.u_dir
    }

    /// Returns the V direction vector.
    #[must_use]
    pub fn v_dir(&self) -> &Vector3 {
        &self.v_dir
    }

    /// Returns the unit normal (axis direction) of the plane.
    #[must_use]
    pub fn plane_normal(&self) -> &UnitVector3 {
        &self.normal
    }
}

impl Surface for Plane {
    fn evaluate(&self, u: f64, v: f64) -> Result<Point3> {
        Ok(self.origin + self.u_dir * u + self.v_dir * v)
    }

    fn normal(&self, _u: f64, _v: f64) -> Result<Vector3> {
        Ok(self.normal.into_inner())
    }

    fn domain(&self) -> SurfaceDomain {
        SurfaceDomain::new(f64::NEG_INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::INFINITY)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn frame_is_right_handed() {
        let plane = Plane::new(p(0.0, 0.0, 0.0), Vector3::new(0.0, 0.0, 3.0), Vector3::new(2.0, 0.0, 1.0))
            .unwrap();
        assert_relative_eq!(*plane.u_dir(), Vector3::x(), epsilon = 1e-12);
        assert_relative_eq!(plane.u_dir().cross(plane.v_dir()), plane.plane_normal().into_inner(), epsilon = 1e-12);
    }

    #[test]
    fn parametric_origin_is_plane_origin() {
        let plane = Plane::from_normal(p(1.0, 2.0, 3.0), Vector3::new(1.0, 1.0, 0.0)).unwrap();
        assert_relative_eq!(plane.evaluate(0.0, 0.0).unwrap(), p(1.0, 2.0, 3.0));
    }

    #[test]
    fn normal_is_unit() {
        let plane = Plane::from_normal(p(0.0, 0.0, 0.0), Vector3::new(3.0, 0.0, 4.0)).unwrap();
        assert_relative_eq!(plane.normal(0.0, 0.0).unwrap().norm(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn offset_moves_origin_along_normal() {
        let plane = Plane::from_normal(p(0.0, 0.0, 1.0), -Vector3::z()).unwrap();
        let moved = plane.offset(4.0);
        assert_relative_eq!(*moved.origin(), p(0.0, 0.0, -3.0));
        assert_relative_eq!(moved.plane_normal().into_inner(), -Vector3::z());
    }

    #[test]
    fn degenerate_inputs() {
        assert!(Plane::from_normal(p(0.0, 0.0, 0.0), Vector3::zeros()).is_err());
        assert!(Plane::new(p(0.0, 0.0, 0.0), Vector3::z(), Vector3::new(0.0, 0.0, -2.0)).is_err());
    }
}
