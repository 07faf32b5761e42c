mod make_box;
mod make_face;
mod make_shell;
mod make_solid;
mod make_wire;

pub use make_box::MakeBox;
pub use make_face::MakeFace;
pub use make_shell::MakeShell;
pub use make_solid::MakeSolid;
pub use make_wire::MakeWire;

use crate::error::Result;
use crate::math::Point3;
use crate::topology::{TopologyStore, WireId};

/// Collects vertex positions from a wire in traversal order.
pub(crate) fn wire_points(store: &TopologyStore, wire_id: WireId) -> Result<Vec<Point3>> {
    let wire = store.wire(wire_id)?;
    let mut points = Vec::with_capacity(wire.edges.len());
    for oe in &wire.edges {
        let edge = store.edge(oe.edge)?;
        let vertex_id = if oe.forward { edge.start } else { edge.end };
        points.push(store.vertex(vertex_id)?.point);
    }
    Ok(points)
}
