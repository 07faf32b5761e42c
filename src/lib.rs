//! Detection of haunches in boundary-representation solids.
//!
//! A haunch is a pair of parallel planar faces of one solid, separated by a
//! bounded distance along their shared normal, whose boundary vertices
//! correspond under that offset. The detector lives in
//! [`operations::haunch`]; the rest of the crate is the small B-Rep model it
//! reads and the operations used to build solids for it.

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod topology;

pub use error::{HaunchError, Result};
