use crate::error::{GeometryError, Result, TopologyError};
use crate::geometry::surface::Plane;
use crate::math::distance_3d::signed_distance_to_plane;
use crate::math::polygon_3d::newell_normal;
use crate::topology::{FaceData, FaceId, FaceSurface, TopologyStore, WireId};

use super::wire_points;

/// Maximum distance of a boundary corner from the fitted plane.
const PLANARITY_TOLERANCE: f64 = 1e-7;

/// Creates a face bounded by closed wires.
///
/// Without an explicit surface the face is planar: the plane normal is the
/// Newell normal of the outer wire, its origin is the wire's first corner
/// and its U direction runs along the wire's first edge.
pub struct MakeFace {
    outer_wire: WireId,
    inner_wires: Vec<WireId>,
    surface: Option<FaceSurface>,
}

impl MakeFace {
    /// Creates a new planar `MakeFace` operation.
    #[must_use]
    pub fn new(outer_wire: WireId, inner_wires: Vec<WireId>) -> Self {
        Self {
            outer_wire,
            inner_wires,
            surface: None,
        }
    }

    /// Creates a `MakeFace` operation that puts the boundary on the given surface.
    ///
    /// The boundary is trusted to lie on the surface.
    #[must_use]
    pub fn with_surface(outer_wire: WireId, inner_wires: Vec<WireId>, surface: FaceSurface) -> Self {
        Self {
            outer_wire,
            inner_wires,
            surface: Some(surface),
        }
    }

    /// Executes the operation, creating the face in the topology store.
    ///
    /// # Errors
    ///
    /// Returns an error if a wire is missing or open, or, for planar faces,
    /// if the outer wire is degenerate or any corner lies off its plane.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<FaceId> {
        for wire in std::iter::once(self.outer_wire).chain(self.inner_wires.iter().copied()) {
            if !store.wire(wire)?.is_closed {
                return Err(TopologyError::InvalidTopology("face boundary wire is not closed".into()).into());
            }
        }

        let surface = match &self.surface {
            Some(surface) => surface.clone(),
            None => FaceSurface::Plane(self.fit_plane(store)?),
        };

        Ok(store.add_face(FaceData {
            surface,
            outer_wire: self.outer_wire,
            inner_wires: self.inner_wires.clone(),
            same_sense: true,
        }))
    }

    fn fit_plane(&self, store: &TopologyStore) -> Result<Plane> {
        let outer = wire_points(store, self.outer_wire)?;
        let normal = newell_normal(&outer)?;
        let plane = Plane::new(outer[0], normal.into_inner(), outer[1] - outer[0])?;

        for wire in std::iter::once(self.outer_wire).chain(self.inner_wires.iter().copied()) {
            for point in wire_points(store, wire)? {
                if signed_distance_to_plane(&point, &plane).abs() > PLANARITY_TOLERANCE {
                    return Err(GeometryError::Degenerate("face boundary is not planar".into()).into());
                }
            }
        }
        Ok(plane)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::surface::Cylinder;
    use crate::math::{Point3, Vector3};
    use crate::operations::creation::MakeWire;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn plane_follows_first_corner_and_edge() {
        let mut store = TopologyStore::new();
        let wire = MakeWire::new(
            vec![p(1.0, 1.0, 2.0), p(1.0, 3.0, 2.0), p(0.0, 3.0, 2.0), p(0.0, 1.0, 2.0)],
            true,
        )
        .execute(&mut store)
        .unwrap();
        let face = MakeFace::new(wire, vec![]).execute(&mut store).unwrap();

        let data = store.face(face).unwrap();
        let plane = data.surface.as_plane().unwrap();
        assert_relative_eq!(*plane.origin(), p(1.0, 1.0, 2.0));
        assert_relative_eq!(*plane.u_dir(), Vector3::y(), epsilon = 1e-12);
        assert_relative_eq!(plane.plane_normal().into_inner(), Vector3::z(), epsilon = 1e-12);
        assert!(data.same_sense);
    }

    #[test]
    fn explicit_surface_is_kept() {
        let mut store = TopologyStore::new();
        let wire = MakeWire::new(vec![p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0), p(0.0, 1.0, 1.0)], true)
            .execute(&mut store)
            .unwrap();
        let cylinder = Cylinder::new(Point3::origin(), Vector3::z(), 1.0).unwrap();
        let face = MakeFace::with_surface(wire, vec![], FaceSurface::Cylinder(cylinder))
            .execute(&mut store)
            .unwrap();
        assert!(store.face(face).unwrap().surface.as_plane().is_none());
    }

    #[test]
    fn open_wire_rejected() {
        let mut store = TopologyStore::new();
        let wire = MakeWire::new(vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0)], false)
            .execute(&mut store)
            .unwrap();
        assert!(MakeFace::new(wire, vec![]).execute(&mut store).is_err());
    }

    #[test]
    fn warped_boundary_rejected() {
        let mut store = TopologyStore::new();
        let wire = MakeWire::new(
            vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.5), p(0.0, 1.0, 0.0)],
            true,
        )
        .execute(&mut store)
        .unwrap();
        assert!(MakeFace::new(wire, vec![]).execute(&mut store).is_err());
    }
}
