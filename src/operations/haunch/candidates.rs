use super::{HaunchParams, PlanarFace};

/// A pair of planar faces that passed the parallelism and distance filters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    /// Index of the first face in the collected list.
    pub first: usize,
    /// Index of the second face; always greater than `first`.
    pub second: usize,
    /// Measured separation.
    pub distance: f64,
}

/// Scans every unordered pair of planar faces for parallel, nearby ones.
///
/// Quadratic in the number of faces. With the `parallel` feature the scan is
/// spread over the rayon pool; the output order is the same either way.
pub struct FindCandidates<'a> {
    entries: &'a [PlanarFace],
    params: &'a HaunchParams,
}

impl<'a> FindCandidates<'a> {
    /// Creates a new `FindCandidates` operation.
    #[must_use]
    pub fn new(entries: &'a [PlanarFace], params: &'a HaunchParams) -> Self {
        Self { entries, params }
    }

    /// Executes the scan, returning candidates ordered by `(first, second)`.
    #[cfg(not(feature = "parallel"))]
    #[must_use]
    pub fn execute(&self) -> Vec<Candidate> {
        (0..self.entries.len())
            .flat_map(|i| self.pairs_from(i))
            .collect()
    }

    /// Executes the scan, returning candidates ordered by `(first, second)`.
    #[cfg(feature = "parallel")]
    #[must_use]
    pub fn execute(&self) -> Vec<Candidate> {
        use rayon::prelude::*;
        (0..self.entries.len())
            .into_par_iter()
            .flat_map_iter(|i| self.pairs_from(i))
            .collect()
    }

    fn pairs_from(&self, first: usize) -> impl Iterator<Item = Candidate> + '_ {
        let a = &self.entries[first];
        self.entries[first + 1..]
            .iter()
            .enumerate()
            .filter_map(move |(offset, b)| {
                let parallel = self.params.parallelism.accepts(
                    &a.normal.into_inner(),
                    &b.normal.into_inner(),
                    self.params.angular_tolerance,
                );
                if !parallel {
                    return None;
                }
                let distance = self.params.distance.measure(a, b);
                (distance <= self.params.max_distance).then_some(Candidate {
                    first,
                    second: first + 1 + offset,
                    distance,
                })
            })
    }
}
