use tracing::trace;

use crate::error::Result;
use crate::math::distance_3d::decompose_along;
use crate::math::{Point3, UnitVector3, VERTEX_TOLERANCE};
use crate::operations::query::FaceVertices;
use crate::topology::{FaceId, TopologyStore};

use super::VertexMatching;

/// Checks that the vertices of one face are the vertices of another moved by
/// `separation` along `normal`.
///
/// Both faces must have the same number of distinct vertices. Each vertex
/// `p1` of the first face then needs a vertex `p2` of the second face whose
/// displacement `p2 - p1` has a normal component of magnitude `separation`
/// and no lateral component, both within the tolerance. The check is one-way:
/// vertices of the second face are not required to find partners themselves.
pub struct VerifyCorrespondence {
    face_a: FaceId,
    face_b: FaceId,
    normal: UnitVector3,
    separation: f64,
    tolerance: f64,
    matching: VertexMatching,
}

impl VerifyCorrespondence {
    /// Creates a new `VerifyCorrespondence` query with the default tolerance
    /// and existential matching.
    #[must_use]
    pub fn new(face_a: FaceId, face_b: FaceId, normal: UnitVector3, separation: f64) -> Self {
        Self {
            face_a,
            face_b,
            normal,
            separation,
            tolerance: VERTEX_TOLERANCE,
            matching: VertexMatching::Existential,
        }
    }

    /// Sets the absolute matching tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the vertex pairing strategy.
    #[must_use]
    pub fn with_matching(mut self, matching: VertexMatching) -> Self {
        self.matching = matching;
        self
    }

    /// Executes the check.
    ///
    /// # Errors
    ///
    /// Returns an error if either face's boundary cannot be resolved.
    pub fn execute(&self, store: &TopologyStore) -> Result<bool> {
        let a = FaceVertices::new(self.face_a).execute(store)?;
        let b = FaceVertices::new(self.face_b).execute(store)?;
        if a.len() != b.len() {
            trace!(a = a.len(), b = b.len(), "vertex counts differ");
            return Ok(false);
        }

        Ok(match self.matching {
            VertexMatching::Existential => a
                .iter()
                .all(|p1| b.iter().any(|p2| self.offset_error(p1, p2).is_some())),
            VertexMatching::Bijective => self.assign(&a, &b),
        })
    }

    /// Greedy assignment: each vertex of `a` takes the unused vertex of `b`
    /// with the smallest offset error.
    fn assign(&self, a: &[Point3], b: &[Point3]) -> bool {
        let mut used = vec![false; b.len()];
        for p1 in a {
            let best = b
                .iter()
                .enumerate()
                .filter(|(j, _)| !used[*j])
                .filter_map(|(j, p2)| self.offset_error(p1, p2).map(|error| (j, error)))
                .min_by(|x, y| x.1.total_cmp(&y.1));
            match best {
                Some((j, _)) => used[j] = true,
                None => return false,
            }
        }
        true
    }

    /// Returns how far `p2` is from being `p1` offset by the separation, or
    /// `None` if either component is out of tolerance.
    fn offset_error(&self, p1: &Point3, p2: &Point3) -> Option<f64> {
        let (along, lateral) = decompose_along(&(p2 - p1), &self.normal.into_inner());
        let gap = (along.abs() - self.separation).abs();
        (lateral <= self.tolerance && gap <= self.tolerance).then_some(lateral + gap)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Vector3;
    use crate::operations::creation::{MakeFace, MakeWire};

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn face(store: &mut TopologyStore, points: Vec<Point3>) -> FaceId {
        let wire = MakeWire::new(points, true).execute(store).unwrap();
        MakeFace::new(wire, vec![]).execute(store).unwrap()
    }

    fn square(z: f64) -> Vec<Point3> {
        vec![p(0.0, 0.0, z), p(1.0, 0.0, z), p(1.0, 1.0, z), p(0.0, 1.0, z)]
    }

    fn up() -> UnitVector3 {
        UnitVector3::new_normalize(Vector3::z())
    }

    #[test]
    fn offset_square_matches_in_any_vertex_order() {
        let mut store = TopologyStore::new();
        let bottom = face(&mut store, square(0.0));
        let mut top_points = square(10.0);
        top_points.reverse();
        let top = face(&mut store, top_points);

        assert!(VerifyCorrespondence::new(bottom, top, up(), 10.0).execute(&store).unwrap());
        // The normal component is compared by magnitude.
        let down = UnitVector3::new_normalize(-Vector3::z());
        assert!(VerifyCorrespondence::new(top, bottom, down, 10.0).execute(&store).unwrap());
    }

    #[test]
    fn wrong_separation_fails() {
        let mut store = TopologyStore::new();
        let bottom = face(&mut store, square(0.0));
        let top = face(&mut store, square(10.0));
        assert!(!VerifyCorrespondence::new(bottom, top, up(), 9.0).execute(&store).unwrap());
        assert!(VerifyCorrespondence::new(bottom, top, up(), 9.9)
            .with_tolerance(0.2)
            .execute(&store)
            .unwrap());
    }

    #[test]
    fn lateral_shift_fails() {
        let mut store = TopologyStore::new();
        let bottom = face(&mut store, square(0.0));
        let shifted: Vec<Point3> = square(10.0).iter().map(|q| q + Vector3::new(0.5, 0.0, 0.0)).collect();
        let top = face(&mut store, shifted);
        assert!(!VerifyCorrespondence::new(bottom, top, up(), 10.0).execute(&store).unwrap());
    }

    #[test]
    fn vertex_count_mismatch_fails() {
        let mut store = TopologyStore::new();
        let bottom = face(&mut store, square(0.0));
        let triangle = face(&mut store, vec![p(0.0, 0.0, 10.0), p(1.0, 0.0, 10.0), p(1.0, 1.0, 10.0)]);
        assert!(!VerifyCorrespondence::new(bottom, triangle, up(), 10.0).execute(&store).unwrap());
        assert!(!VerifyCorrespondence::new(triangle, bottom, up(), 10.0).execute(&store).unwrap());
    }

    #[test]
    fn shared_partner_only_passes_existential() {
        // Two corners of the first face coincide, so both find the same
        // partner and one corner of the second face is never claimed.
        let mut store = TopologyStore::new();
        let second = face(
            &mut store,
            vec![p(0.0, 0.0, 3.0), p(2.0, 0.0, 3.0), p(2.0, 2.0, 3.0), p(0.0, 2.0, 3.0)],
        );
        let duplicate = face(
            &mut store,
            vec![p(0.0, 0.0, 0.0), p(2.0, 0.0, 0.0), p(2.0, 2.0, 0.0), p(2.0, 0.0, 0.0)],
        );

        assert!(VerifyCorrespondence::new(duplicate, second, up(), 3.0).execute(&store).unwrap());
        assert!(!VerifyCorrespondence::new(duplicate, second, up(), 3.0)
            .with_matching(VertexMatching::Bijective)
            .execute(&store)
            .unwrap());
    }

    #[test]
    fn bijective_accepts_true_offsets() {
        let mut store = TopologyStore::new();
        let bottom = face(&mut store, square(0.0));
        let top = face(&mut store, square(4.0));
        assert!(VerifyCorrespondence::new(bottom, top, up(), 4.0)
            .with_matching(VertexMatching::Bijective)
            .execute(&store)
            .unwrap());
    }
}
