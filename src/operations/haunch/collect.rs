use tracing::{debug, instrument, trace};

use crate::error::Result;
use crate::geometry::surface::Surface;
use crate::math::{Point3, UnitVector3};
use crate::operations::query::PlaneNormal;
use crate::topology::{FaceId, SolidId, TopologyStore};

/// A planar face of the solid under inspection.
#[derive(Debug, Clone)]
pub struct PlanarFace {
    /// The face.
    pub face: FaceId,
    /// Unit axis direction of the face's plane.
    pub normal: UnitVector3,
    /// The plane evaluated at its parametric origin.
    pub sample: Point3,
}

/// Lists the planar faces of a solid in the solid's face order.
///
/// Faces that are not exact planes, or whose geometry no longer resolves,
/// are skipped.
pub struct CollectPlanarFaces {
    solid: SolidId,
}

impl CollectPlanarFaces {
    /// Creates a new `CollectPlanarFaces` operation.
    #[must_use]
    pub fn new(solid: SolidId) -> Self {
        Self { solid }
    }

    /// Executes the collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid or one of its shells is not found.
    #[instrument(skip_all, fields(solid = ?self.solid))]
    pub fn execute(&self, store: &TopologyStore) -> Result<Vec<PlanarFace>> {
        let faces = store.solid_faces(self.solid)?;
        let total = faces.len();

        let mut planar = Vec::with_capacity(total);
        for face in faces {
            let Some(plane) = PlaneNormal::new(face).plane(store) else {
                trace!(?face, "skipping non-planar face");
                continue;
            };
            planar.push(PlanarFace {
                face,
                normal: *plane.plane_normal(),
                sample: plane.evaluate(0.0, 0.0)?,
            });
        }

        debug!(total, planar = planar.len(), "collected planar faces");
        Ok(planar)
    }
}
