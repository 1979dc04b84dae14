//! Reference-grid generation for Gridfold.
//!
//! This crate turns a dataset's coordinate domain into an ordered set of
//! reference points — the [`Grid`] — at which windowed aggregates are
//! later computed. Four strategies are available, selected by
//! [`GridStrategy`]:
//!
//! - [`GridStrategy::Identical`]: evenly spaced per-axis points, Cartesian
//!   product, any dimensionality.
//! - [`GridStrategy::SquareTile`]: a 2-D lattice of uniform square cells
//!   sized so the bounding box yields roughly the target count.
//! - [`GridStrategy::AhullCrop`]: a SquareTile lattice cropped to the
//!   dataset's alpha-shape boundary.
//! - [`GridStrategy::AhullFill`]: iterative density search so the cropped
//!   lattice lands close to the target count.
//!
//! Each strategy is also independently callable
//! ([`build_grid_identical`], [`build_grid_squaretile`],
//! [`build_grid_ahull_crop`], [`build_grid_ahull_fill`]) so expensive
//! grids can be precomputed once and replayed through
//! [`GridSpec::pregenerated`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod extent;
pub mod fill;
pub mod grid;
pub mod spec;
pub mod strategy;

#[cfg(test)]
pub(crate) mod compliance;

pub use error::GridError;
pub use extent::AxisExtent;
pub use fill::{build_grid_ahull_fill, Convergence, FILL_MAX_ITERS, FILL_TOLERANCE};
pub use grid::Grid;
pub use spec::{GridSpec, GridStrategy};
pub use strategy::{
    build_grid, build_grid_ahull_crop, build_grid_identical, build_grid_squaretile, GridOutcome,
};
