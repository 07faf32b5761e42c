use crate::topology::{SolidId, TopologyStore};

/// Supplies the solids a scene-wide detection pass should inspect.
///
/// Implemented for explicit lists, for an optional single solid (an empty
/// selection yields nothing), and for a whole [`TopologyStore`].
pub trait ShapeSource {
    /// Returns the solids to inspect, in inspection order.
    fn solids(&self) -> Vec<SolidId>;
}

impl ShapeSource for [SolidId] {
    fn solids(&self) -> Vec<SolidId> {
        self.to_vec()
    }
}

impl ShapeSource for Vec<SolidId> {
    fn solids(&self) -> Vec<SolidId> {
        self.clone()
    }
}

impl ShapeSource for Option<SolidId> {
    fn solids(&self) -> Vec<SolidId> {
        self.iter().copied().collect()
    }
}

impl ShapeSource for TopologyStore {
    fn solids(&self) -> Vec<SolidId> {
        self.solid_ids().collect()
    }
}
