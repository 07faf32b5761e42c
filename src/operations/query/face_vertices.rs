use crate::error::Result;
use crate::math::Point3;
use crate::topology::{FaceId, TopologyStore};

/// Returns the positions of the distinct vertices bounding a face.
///
/// See [`TopologyStore::face_vertices`] for ordering and deduplication.
pub struct FaceVertices {
    face: FaceId,
}

impl FaceVertices {
    /// Creates a new `FaceVertices` query.
    #[must_use]
    pub fn new(face: FaceId) -> Self {
        Self { face }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns an error if the face or its boundary cannot be resolved.
    pub fn execute(&self, store: &TopologyStore) -> Result<Vec<Point3>> {
        let mut points = Vec::new();
        for vertex in store.face_vertices(self.face)? {
            points.push(store.vertex(vertex)?.point);
        }
        Ok(points)
    }
}
