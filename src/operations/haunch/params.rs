use crate::error::{OperationError, Result};
use crate::math::{distance_3d::unsigned_angle, Vector3, ANGULAR_TOLERANCE, VERTEX_TOLERANCE};

use super::PlanarFace;

/// Default maximum separation between the two faces of a haunch.
pub const DEFAULT_MAX_DISTANCE: f64 = 20.0;

/// Which normal pairs count as parallel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Parallelism {
    /// Same or opposite direction. The two faces of a rib on a solid have
    /// opposing outward normals, so this is the default.
    #[default]
    Unsigned,
    /// Same direction only.
    Signed,
}

impl Parallelism {
    /// Returns `true` if the normals are parallel under this convention
    /// within `tolerance` radians.
    #[must_use]
    pub fn accepts(self, a: &Vector3, b: &Vector3, tolerance: f64) -> bool {
        let angle = match self {
            Self::Unsigned => unsigned_angle(a, b),
            Self::Signed => a.angle(b),
        };
        angle <= tolerance
    }
}

/// How the separation of two parallel planar faces is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceMode {
    /// Distance between the two planes along the first face's normal,
    /// `|(o2 - o1) · n1|`.
    #[default]
    PlaneToPlane,
    /// Euclidean distance between each plane's parametric origin `P(0, 0)`.
    ///
    /// Overestimates the separation whenever the two origins are not
    /// directly opposite each other, which then fails vertex verification.
    Sampled,
}

impl DistanceMode {
    /// Measures the separation between two planar faces.
    #[must_use]
    pub fn measure(self, a: &PlanarFace, b: &PlanarFace) -> f64 {
        match self {
            Self::PlaneToPlane => (b.sample - a.sample).dot(&a.normal.into_inner()).abs(),
            Self::Sampled => (b.sample - a.sample).norm(),
        }
    }
}

/// How vertices of the first face are paired with vertices of the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VertexMatching {
    /// Every vertex of the first face needs some offset partner on the
    /// second; partners may be shared.
    #[default]
    Existential,
    /// Every vertex of the first face claims a distinct partner, nearest
    /// offset first.
    Bijective,
}

/// Parameters of a detection pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HaunchParams {
    /// Largest accepted separation between the two faces.
    pub max_distance: f64,
    /// Angular tolerance (radians) for the parallelism test.
    pub angular_tolerance: f64,
    /// Absolute tolerance for matching offset vertices.
    pub vertex_tolerance: f64,
    /// Parallel normal convention.
    pub parallelism: Parallelism,
    /// Separation measurement.
    pub distance: DistanceMode,
    /// Vertex pairing strategy.
    pub matching: VertexMatching,
}

impl Default for HaunchParams {
    fn default() -> Self {
        Self {
            max_distance: DEFAULT_MAX_DISTANCE,
            angular_tolerance: ANGULAR_TOLERANCE,
            vertex_tolerance: VERTEX_TOLERANCE,
            parallelism: Parallelism::default(),
            distance: DistanceMode::default(),
            matching: VertexMatching::default(),
        }
    }
}

impl HaunchParams {
    /// Creates default parameters with the given maximum separation.
    #[must_use]
    pub fn new(max_distance: f64) -> Self {
        Self {
            max_distance,
            ..Self::default()
        }
    }

    /// Sets the angular tolerance.
    #[must_use]
    pub fn with_angular_tolerance(mut self, tolerance: f64) -> Self {
        self.angular_tolerance = tolerance;
        self
    }

    /// Sets the vertex matching tolerance.
    #[must_use]
    pub fn with_vertex_tolerance(mut self, tolerance: f64) -> Self {
        self.vertex_tolerance = tolerance;
        self
    }

    /// Sets the parallel normal convention.
    #[must_use]
    pub fn with_parallelism(mut self, parallelism: Parallelism) -> Self {
        self.parallelism = parallelism;
        self
    }

    /// Sets the separation measurement.
    #[must_use]
    pub fn with_distance(mut self, distance: DistanceMode) -> Self {
        self.distance = distance;
        self
    }

    /// Sets the vertex pairing strategy.
    #[must_use]
    pub fn with_matching(mut self, matching: VertexMatching) -> Self {
        self.matching = matching;
        self
    }

    /// Checks that the parameters describe a usable pass.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if `max_distance` is not a
    /// positive finite number or a tolerance is negative or not finite.
    pub fn validate(&self) -> Result<()> {
        if !self.max_distance.is_finite() || self.max_distance <= 0.0 {
            return Err(OperationError::InvalidInput(format!(
                "max distance must be positive and finite, got {}",
                self.max_distance
            ))
            .into());
        }
        for (name, value) in [
            ("angular tolerance", self.angular_tolerance),
            ("vertex tolerance", self.vertex_tolerance),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(OperationError::InvalidInput(format!(
                    "{name} must be non-negative and finite, got {value}"
                ))
                .into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_4;

    #[test]
    fn opposite_normals_depend_on_convention() {
        let up = Vector3::z();
        let down = -Vector3::z();
        assert!(Parallelism::Unsigned.accepts(&up, &down, ANGULAR_TOLERANCE));
        assert!(!Parallelism::Signed.accepts(&up, &down, ANGULAR_TOLERANCE));
        assert!(Parallelism::Signed.accepts(&up, &up, ANGULAR_TOLERANCE));
    }

    #[test]
    fn tilted_normals_rejected() {
        let up = Vector3::z();
        let tilted = Vector3::new(0.0, FRAC_PI_4.sin(), FRAC_PI_4.cos());
        assert!(!Parallelism::Unsigned.accepts(&up, &tilted, ANGULAR_TOLERANCE));
        assert!(Parallelism::Unsigned.accepts(&up, &tilted, 1.0));
    }

    #[test]
    fn defaults() {
        let params = HaunchParams::default();
        assert!((params.max_distance - DEFAULT_MAX_DISTANCE).abs() < f64::EPSILON);
        assert_eq!(params.parallelism, Parallelism::Unsigned);
        assert_eq!(params.distance, DistanceMode::PlaneToPlane);
        assert_eq!(params.matching, VertexMatching::Existential);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn invalid_parameters() {
        assert!(HaunchParams::new(0.0).validate().is_err());
        assert!(HaunchParams::new(-3.0).validate().is_err());
        assert!(HaunchParams::new(f64::NAN).validate().is_err());
        assert!(HaunchParams::new(f64::INFINITY).validate().is_err());
        assert!(HaunchParams::new(5.0).with_vertex_tolerance(-1.0).validate().is_err());
        assert!(HaunchParams::new(5.0).with_angular_tolerance(f64::NAN).validate().is_err());
        assert!(HaunchParams::new(5.0).with_vertex_tolerance(0.0).validate().is_ok());
    }
}
