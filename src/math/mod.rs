pub mod distance_3d;
pub mod polygon_3d;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Unit-length 3D vector type.
pub type UnitVector3 = nalgebra::Unit<Vector3>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Default angular tolerance (radians) for deciding that two directions are parallel.
pub const ANGULAR_TOLERANCE: f64 = 1e-7;

/// Default absolute tolerance for matching offset vertex positions.
pub const VERTEX_TOLERANCE: f64 = 1e-4;
