use crate::error::{GeometryError, Result};
use crate::math::{Point3, UnitVector3, Vector3, TOLERANCE};

use super::{Surface, SurfaceDomain};

/// A circular cylinder of a given radius around an axis line.
///
/// `P(u, v) = base + radius * (cos(u) * x_dir + sin(u) * y_dir) + v * axis`,
/// with `x_dir`, `y_dir`, `axis` forming a right-handed orthonormal frame.
#[derive(Debug, Clone)]
pub struct Cylinder {
    base: Point3,
    axis: UnitVector3,
    x_dir: Vector3,
    radius: f64,
}

impl Cylinder {
    /// Creates a cylinder around the axis through `base` along `axis`.
    ///
    /// # Errors
    ///
    /// Returns an error if the axis is zero-length or the radius is not positive.
    pub fn new(base: Point3, axis: Vector3, radius: f64) -> Result<Self> {
        if radius < TOLERANCE {
            return Err(GeometryError::Degenerate("cylinder radius must be positive".into()).into());
        }
        let axis = UnitVector3::try_new(axis, TOLERANCE).ok_or(GeometryError::ZeroVector)?;
        let reference = if axis.x.abs() < 0.9 { Vector3::x() } else { Vector3::y() };
        let x_dir = axis.cross(&reference).normalize();
        Ok(Self {
            base,
            axis,
            x_dir,
            radius,
        })
    }

    /// Returns the radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the unit axis direction.
    #[must_use]
    pub fn axis(&self) -> &UnitVector3 {
        &self.axis
    }

    fn radial(&self, u: f64) -> Vector3 {
        let y_dir = self.axis.cross(&self.x_dir);
        self.x_dir * u.cos() + y_dir * u.sin()
    }
}

impl Surface for Cylinder {
    fn evaluate(&self, u: f64, v: f64) -> Result<Point3> {
        Ok(self.base + self.radial(u) * self.radius + self.axis.into_inner() * v)
    }

    fn normal(&self, u: f64, _v: f64) -> Result<Vector3> {
        Ok(self.radial(u))
    }

    fn domain(&self) -> SurfaceDomain {
        SurfaceDomain::new(0.0, std::f64::consts::TAU, f64::NEG_INFINITY, f64::INFINITY)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn points_lie_at_radius() {
        let c = Cylinder::new(Point3::new(1.0, 1.0, 0.0), Vector3::z(), 2.5).unwrap();
        for &(u, v) in &[(0.0, 0.0), (FRAC_PI_2, 3.0), (2.0, -1.0)] {
            let pt = c.evaluate(u, v).unwrap();
            let radial = Vector3::new(pt.x - 1.0, pt.y - 1.0, 0.0);
            assert_relative_eq!(radial.norm(), 2.5, epsilon = 1e-12);
            assert_relative_eq!(pt.z, v, epsilon = 1e-12);
        }
    }

    #[test]
    fn normal_is_radial_and_unit() {
        let c = Cylinder::new(Point3::origin(), Vector3::z(), 3.0).unwrap();
        let n = c.normal(1.0, 0.0).unwrap();
        assert_relative_eq!(n.norm(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(n.dot(&c.axis().into_inner()), 0.0, epsilon = 1e-12);
        assert_relative_eq!(c.evaluate(1.0, 0.0).unwrap().coords, n * 3.0, epsilon = 1e-12);
    }

    #[test]
    fn invalid_inputs() {
        assert!(Cylinder::new(Point3::origin(), Vector3::z(), 0.0).is_err());
        assert!(Cylinder::new(Point3::origin(), Vector3::zeros(), 1.0).is_err());
    }
}
