use std::collections::HashMap;

use crate::error::{OperationError, Result};
use crate::geometry::curve::Line;
use crate::math::{Point3, TOLERANCE};
use crate::topology::{
    EdgeCurve, EdgeData, EdgeId, OrientedEdge, SolidId, TopologyStore, VertexData, VertexId,
    WireData,
};

use super::{MakeFace, MakeShell, MakeSolid};

/// Corner loops of the six box faces, counter-clockwise seen from outside.
///
/// Corner `i + 2j + 4k` sits at `(x[i], y[j], z[k])`.
const FACE_LOOPS: [[usize; 4]; 6] = [
    [0, 2, 3, 1], // z min
    [4, 5, 7, 6], // z max
    [0, 1, 5, 4], // y min
    [2, 6, 7, 3], // y max
    [0, 4, 6, 2], // x min
    [1, 3, 7, 5], // x max
];

/// Creates an axis-aligned box solid from two corner points.
///
/// The six planar faces have outward normals and share the eight corner
/// vertices and twelve edges.
pub struct MakeBox {
    min_corner: Point3,
    max_corner: Point3,
}

impl MakeBox {
    /// Creates a new `MakeBox` operation.
    #[must_use]
    pub fn new(min_corner: Point3, max_corner: Point3) -> Self {
        Self {
            min_corner,
            max_corner,
        }
    }

    /// Executes the operation, creating the box in the topology store.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_corner` does not exceed `min_corner` on
    /// every axis.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<SolidId> {
        let extent = self.max_corner - self.min_corner;
        if extent.iter().any(|&e| e < TOLERANCE) {
            return Err(OperationError::InvalidInput(
                "box max corner must exceed min corner on every axis".into(),
            )
            .into());
        }

        let (lo, hi) = (self.min_corner, self.max_corner);
        let corners: Vec<VertexId> = (0..8)
            .map(|c| {
                let pick = |bit: usize, a: f64, b: f64| if c & bit == 0 { a } else { b };
                let point = Point3::new(pick(1, lo.x, hi.x), pick(2, lo.y, hi.y), pick(4, lo.z, hi.z));
                store.add_vertex(VertexData::new(point))
            })
            .collect();

        let mut edges: HashMap<(usize, usize), EdgeId> = HashMap::new();
        let mut faces = Vec::with_capacity(FACE_LOOPS.len());
        for face_loop in FACE_LOOPS {
            let mut wire_edges = Vec::with_capacity(4);
            for i in 0..4 {
                let (a, b) = (face_loop[i], face_loop[(i + 1) % 4]);
                let key = (a.min(b), a.max(b));
                let edge = match edges.get(&key) {
                    Some(&edge) => edge,
                    None => {
                        let edge = add_line_edge(store, corners[key.0], corners[key.1])?;
                        edges.insert(key, edge);
                        edge
                    }
                };
                wire_edges.push(OrientedEdge::new(edge, a == key.0));
            }
            let wire = store.add_wire(WireData {
                edges: wire_edges,
                is_closed: true,
            });
            faces.push(MakeFace::new(wire, vec![]).execute(store)?);
        }

        let shell = MakeShell::new(faces, true).execute(store)?;
        MakeSolid::new(shell, vec![]).execute(store)
    }
}

fn add_line_edge(store: &mut TopologyStore, start: VertexId, end: VertexId) -> Result<EdgeId> {
    let (line, t_end) = Line::through(store.vertex(start)?.point, store.vertex(end)?.point)?;
    Ok(store.add_edge(EdgeData {
        start,
        end,
        curve: EdgeCurve::Line(line),
        t_start: 0.0,
        t_end,
    }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Vector3;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn box_has_6_closed_faces() {
        let mut store = TopologyStore::new();
        let solid = MakeBox::new(p(0.0, 0.0, 0.0), p(2.0, 3.0, 4.0))
            .execute(&mut store)
            .unwrap();
        let shell = store.shell(store.solid(solid).unwrap().outer_shell).unwrap();
        assert_eq!(shell.faces.len(), 6);
        assert!(shell.is_closed);
    }

    #[test]
    fn face_normals_point_outward() {
        let mut store = TopologyStore::new();
        let solid = MakeBox::new(p(-1.0, -1.0, -1.0), p(3.0, 1.0, 5.0))
            .execute(&mut store)
            .unwrap();
        let center = p(1.0, 0.0, 2.0);

        for face in store.solid_faces(solid).unwrap() {
            let plane = store.face(face).unwrap().surface.as_plane().unwrap().clone();
            let to_face: Vector3 = plane.origin() - center;
            assert!(
                plane.plane_normal().dot(&to_face) > 0.0,
                "face normal {:?} should point away from the center",
                plane.plane_normal()
            );
        }
    }

    #[test]
    fn flat_box_rejected() {
        let mut store = TopologyStore::new();
        assert!(MakeBox::new(p(0.0, 0.0, 0.0), p(1.0, 1.0, 0.0))
            .execute(&mut store)
            .is_err());
        assert!(MakeBox::new(p(1.0, 0.0, 0.0), p(0.0, 1.0, 1.0))
            .execute(&mut store)
            .is_err());
    }
}
