use crate::geometry::surface::Plane;
use crate::math::UnitVector3;
use crate::topology::{FaceId, TopologyStore};

/// Classifies a face as planar and returns the plane's axis direction.
///
/// Only faces whose surface is an exact [`Plane`] qualify; flatness of a
/// curved surface is never inferred. A face ID that no longer resolves in
/// the store is treated like a non-planar face.
pub struct PlaneNormal {
    face: FaceId,
}

impl PlaneNormal {
    /// Creates a new `PlaneNormal` query.
    #[must_use]
    pub fn new(face: FaceId) -> Self {
        Self { face }
    }

    /// Executes the query, returning the unit normal, or `None` if the face
    /// is not planar or cannot be resolved.
    #[must_use]
    pub fn execute(&self, store: &TopologyStore) -> Option<UnitVector3> {
        self.plane(store).map(|plane| *plane.plane_normal())
    }

    /// Returns the face's plane, under the same rules as [`Self::execute`].
    #[must_use]
    pub fn plane<'a>(&self, store: &'a TopologyStore) -> Option<&'a Plane> {
        store.face(self.face).ok()?.surface.as_plane()
    }
}
