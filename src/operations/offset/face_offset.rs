use crate::error::{OperationError, Result};
use crate::math::Point3;
use crate::operations::creation::{wire_points, MakeWire};
use crate::topology::{FaceData, FaceId, FaceSurface, TopologyStore};

/// Copies a planar face, displaced by `distance` along its outward normal.
///
/// The outward normal is the plane normal, flipped when the face is not
/// `same_sense`. Boundary wires keep their corner order, so every corner of
/// the copy sits exactly `distance` above the matching corner of the
/// original, and the copy's plane origin is the original origin moved the
/// same way.
pub struct FaceOffset {
    face: FaceId,
    distance: f64,
}

impl FaceOffset {
    /// Creates a new `FaceOffset` operation.
    #[must_use]
    pub fn new(face: FaceId, distance: f64) -> Self {
        Self { face, distance }
    }

    /// Executes the offset, returning the new face ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the face is not found or is not planar.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<FaceId> {
        let face = store.face(self.face)?.clone();
        let FaceSurface::Plane(plane) = &face.surface else {
            return Err(
                OperationError::InvalidInput("only planar faces can be offset".into()).into(),
            );
        };
        let signed = if face.same_sense {
            self.distance
        } else {
            -self.distance
        };
        let shift = plane.plane_normal().into_inner() * signed;

        let mut wires = Vec::with_capacity(1 + face.inner_wires.len());
        for wire in face.wires() {
            let moved: Vec<Point3> = wire_points(store, wire)?.iter().map(|p| p + shift).collect();
            wires.push(MakeWire::new(moved, true).execute(store)?);
        }
        let outer_wire = wires.remove(0);

        Ok(store.add_face(FaceData {
            surface: FaceSurface::Plane(plane.offset(signed)),
            outer_wire,
            inner_wires: wires,
            same_sense: face.same_sense,
        }))
    }
}
