use crate::error::{OperationError, Result};
use crate::math::polygon_3d::newell_normal;
use crate::math::{Point3, Vector3, TOLERANCE};
use crate::operations::creation::{wire_points, MakeFace, MakeShell, MakeSolid, MakeWire};
use crate::topology::{FaceId, SolidId, TopologyStore};

/// Extrudes a face along a direction vector to create a prism solid.
///
/// The shell lists the bottom face, the top face, then one side quad per
/// edge of the profile. All normals point out of the solid.
pub struct Extrude {
    face: FaceId,
    direction: Vector3,
}

impl Extrude {
    /// Creates a new `Extrude` operation.
    #[must_use]
    pub fn new(face: FaceId, direction: Vector3) -> Self {
        Self { face, direction }
    }

    /// Executes the extrusion, creating the solid in the topology store.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if the direction is zero-length,
    /// lies in the profile plane, or the face has inner wires.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<SolidId> {
        if self.direction.norm() < TOLERANCE {
            return Err(
                OperationError::InvalidInput("extrude direction must be non-zero".into()).into(),
            );
        }

        let face = store.face(self.face)?;
        if !face.inner_wires.is_empty() {
            return Err(OperationError::InvalidInput(
                "extrusion of faces with holes is not supported".into(),
            )
            .into());
        }
        let base_points = wire_points(store, face.outer_wire)?;

        // Orient the base so its normal agrees with the direction; then the
        // reversed base faces down and the translated copy faces up.
        let normal = newell_normal(&base_points)?;
        let along = normal.dot(&self.direction);
        if along.abs() < TOLERANCE {
            return Err(OperationError::InvalidInput(
                "extrude direction lies in the profile plane".into(),
            )
            .into());
        }
        let base_points: Vec<Point3> = if along > 0.0 {
            base_points
        } else {
            base_points.into_iter().rev().collect()
        };

        let bottom_points: Vec<Point3> = base_points.iter().rev().copied().collect();
        let top_points: Vec<Point3> = base_points.iter().map(|p| p + self.direction).collect();

        let n = base_points.len();
        let mut faces = Vec::with_capacity(n + 2);
        faces.push(make_planar_face(store, bottom_points)?);
        faces.push(make_planar_face(store, top_points.clone())?);
        for i in 0..n {
            let j = (i + 1) % n;
            let quad = vec![base_points[i], base_points[j], top_points[j], top_points[i]];
            faces.push(make_planar_face(store, quad)?);
        }

        let shell = MakeShell::new(faces, true).execute(store)?;
        MakeSolid::new(shell, vec![]).execute(store)
    }
}

fn make_planar_face(store: &mut TopologyStore, points: Vec<Point3>) -> Result<FaceId> {
    let wire = MakeWire::new(points, true).execute(store)?;
    MakeFace::new(wire, vec![]).execute(store)
}
