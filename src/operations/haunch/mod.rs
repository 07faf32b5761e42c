//! Haunch detection: offset pairs of parallel planar faces.
//!
//! One detection pass over a solid runs the stages below in order; nothing
//! is cached between passes.
//!
//! ```text
//! CollectPlanarFaces   solid -> [(face, plane)]        non-planar faces dropped
//! FindCandidates       all pairs i < j                 parallel and close enough
//! VerifyCorrespondence each candidate                  vertices match under the offset
//! MatchSink            each confirmed pair             delegated to the caller
//! ```
//!
//! [`FindHaunches`] wires the stages together for one solid and
//! [`FindHaunchesInScene`] repeats it for every solid a [`ShapeSource`]
//! supplies.

mod candidates;
mod collect;
mod detect;
mod params;
mod report;
mod source;
mod verify;

pub use candidates::{Candidate, FindCandidates};
pub use collect::{CollectPlanarFaces, PlanarFace};
pub use detect::{FindHaunches, FindHaunchesInScene};
pub use params::{DistanceMode, HaunchParams, Parallelism, VertexMatching, DEFAULT_MAX_DISTANCE};
pub use report::{Highlight, Highlighter, MatchSink, MatchedPair, Rgb};
pub use source::ShapeSource;
pub use verify::VerifyCorrespondence;
