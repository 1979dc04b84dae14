//! 2-D alpha shapes for Gridfold boundary cropping.
//!
//! An alpha shape generalizes the convex hull: a Delaunay triangulation
//! of the point set is filtered by circumradius, keeping only triangles
//! with circumradius at most `alpha`. Small alpha yields a tight boundary
//! that follows concavities; large alpha approaches the convex hull.
//!
//! [`AlphaShape`] is the crate's public type: build it once from a point
//! cloud, then test membership with [`AlphaShape::contains`]. Shapes are
//! immutable and freely shareable across threads.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod delaunay;
pub mod error;
pub mod shape;

pub use error::HullError;
pub use shape::AlphaShape;
