use crate::error::{OperationError, Result};
use crate::geometry::curve::Line;
use crate::math::Point3;
use crate::topology::{
    EdgeCurve, EdgeData, OrientedEdge, TopologyStore, VertexData, VertexId, WireData, WireId,
};

/// Creates a wire of straight edges.
///
/// Either from points (one new vertex per point) or from existing vertices,
/// which lets several wires share corners.
pub struct MakeWire {
    corners: Corners,
    close: bool,
}

enum Corners {
    Points(Vec<Point3>),
    Vertices(Vec<VertexId>),
}

impl MakeWire {
    /// Creates a new `MakeWire` operation from a sequence of 3D points.
    #[must_use]
    pub fn new(points: Vec<Point3>, close: bool) -> Self {
        Self {
            corners: Corners::Points(points),
            close,
        }
    }

    /// Creates a new `MakeWire` operation through existing vertices.
    #[must_use]
    pub fn from_vertices(vertices: Vec<VertexId>, close: bool) -> Self {
        Self {
            corners: Corners::Vertices(vertices),
            close,
        }
    }

    /// Executes the operation, creating the wire in the topology store.
    ///
    /// # Errors
    ///
    /// Returns an error if there are too few corners (two for an open wire,
    /// three for a closed one), a vertex is not found, or two consecutive
    /// corners coincide.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<WireId> {
        let vertices: Vec<VertexId> = match &self.corners {
            Corners::Points(points) => points
                .iter()
                .map(|p| store.add_vertex(VertexData::new(*p)))
                .collect(),
            Corners::Vertices(ids) => ids.clone(),
        };

        let min = if self.close { 3 } else { 2 };
        if vertices.len() < min {
            return Err(OperationError::InvalidInput(format!(
                "wire needs at least {min} corners, got {}",
                vertices.len()
            ))
            .into());
        }

        let segments = if self.close {
            vertices.len()
        } else {
            vertices.len() - 1
        };
        let mut edges = Vec::with_capacity(segments);
        for i in 0..segments {
            let start = vertices[i];
            let end = vertices[(i + 1) % vertices.len()];
            let (line, t_end) =
                Line::through(store.vertex(start)?.point, store.vertex(end)?.point)?;
            let edge = store.add_edge(EdgeData {
                start,
                end,
                curve: EdgeCurve::Line(line),
                t_start: 0.0,
                t_end,
            });
            edges.push(OrientedEdge::new(edge, true));
        }

        Ok(store.add_wire(WireData {
            edges,
            is_closed: self.close,
        }))
    }
}
