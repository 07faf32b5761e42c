use tracing::{debug, info, instrument, trace};

use crate::error::Result;
use crate::topology::{SolidId, TopologyStore};

use super::{
    CollectPlanarFaces, FindCandidates, HaunchParams, MatchSink, MatchedPair, ShapeSource,
    VerifyCorrespondence,
};

/// Finds haunches in one solid and reports each to a sink.
///
/// Pairs are reported in candidate order: by the first face's position in
/// the solid's face order, then by the second's. Each unordered pair is
/// examined once.
pub struct FindHaunches {
    solid: SolidId,
    params: HaunchParams,
}

impl FindHaunches {
    /// Creates a new `FindHaunches` operation.
    #[must_use]
    pub fn new(solid: SolidId, params: HaunchParams) -> Self {
        Self { solid, params }
    }

    /// Executes the detection pass, returning the number of reported pairs.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`](crate::error::OperationError::InvalidInput)
    /// if the parameters are invalid, or a topology error if the solid or a
    /// planar face's boundary cannot be resolved. Pairs reported before the
    /// failure stay reported.
    #[instrument(skip_all, fields(solid = ?self.solid, max_distance = self.params.max_distance))]
    pub fn execute<S>(&self, store: &TopologyStore, sink: &mut S) -> Result<usize>
    where
        S: MatchSink + ?Sized,
    {
        self.params.validate()?;

        let planar = CollectPlanarFaces::new(self.solid).execute(store)?;
        let candidates = FindCandidates::new(&planar, &self.params).execute();
        debug!(candidates = candidates.len(), "scanned face pairs");

        let mut reported = 0;
        for candidate in candidates {
            let a = &planar[candidate.first];
            let b = &planar[candidate.second];
            let matched = VerifyCorrespondence::new(a.face, b.face, a.normal, candidate.distance)
                .with_tolerance(self.params.vertex_tolerance)
                .with_matching(self.params.matching)
                .execute(store)?;
            if !matched {
                trace!(first = ?a.face, second = ?b.face, "vertices do not correspond");
                continue;
            }

            let pair = MatchedPair {
                solid: self.solid,
                first: a.face,
                second: b.face,
                distance: candidate.distance,
                normal: a.normal,
            };
            info!(
                first = ?pair.first,
                second = ?pair.second,
                distance = pair.distance,
                "haunch found"
            );
            sink.report(&pair);
            reported += 1;
        }

        debug!(reported, "detection pass finished");
        Ok(reported)
    }

    /// Executes the detection pass and returns the pairs in report order.
    ///
    /// # Errors
    ///
    /// Same as [`FindHaunches::execute`].
    pub fn collect(&self, store: &TopologyStore) -> Result<Vec<MatchedPair>> {
        let mut pairs = Vec::new();
        self.execute(store, &mut |pair: &MatchedPair| pairs.push(pair.clone()))?;
        Ok(pairs)
    }
}

/// Runs [`FindHaunches`] over every solid a [`ShapeSource`] supplies.
pub struct FindHaunchesInScene {
    params: HaunchParams,
}

impl FindHaunchesInScene {
    /// Creates a new `FindHaunchesInScene` operation.
    #[must_use]
    pub fn new(params: HaunchParams) -> Self {
        Self { params }
    }

    /// Executes the pass over each solid in source order, returning the total
    /// number of reported pairs.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid, even for an empty
    /// source, or if any solid fails; solids after the failing one are not
    /// inspected.
    #[instrument(skip_all, fields(max_distance = self.params.max_distance))]
    pub fn execute<Src, S>(&self, store: &TopologyStore, source: &Src, sink: &mut S) -> Result<usize>
    where
        Src: ShapeSource + ?Sized,
        S: MatchSink + ?Sized,
    {
        self.params.validate()?;

        let solids = source.solids();
        let mut reported = 0;
        for &solid in &solids {
            reported += FindHaunches::new(solid, self.params).execute(store, sink)?;
        }

        debug!(solids = solids.len(), reported, "scene pass finished");
        Ok(reported)
    }
}
