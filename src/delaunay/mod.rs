//! Incremental randomized Delaunay triangulation
//!
//! [`Delaunay`] builds a triangulation by inserting points one at a time
//! into a synthetic enclosing super-triangle, splitting whichever triangle
//! currently contains each new point into three, and then repairing the
//! Delaunay condition with a cascade of edge flips ([`face::Face`] holds
//! the neighbour links the flip walk needs).

mod face;
mod triangulation;

pub use face::{Face, FaceId};
pub use triangulation::Delaunay;
