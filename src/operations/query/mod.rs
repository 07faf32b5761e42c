mod face_vertices;
mod plane_normal;

pub use face_vertices::FaceVertices;
pub use plane_normal::PlaneNormal;
