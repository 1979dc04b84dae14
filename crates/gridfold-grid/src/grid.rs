//! The [`Grid`] of reference points.

use gridfold_core::Coord;

/// An ordered set of reference points over the gridded dimensions.
///
/// Every point has exactly `dimensions.len()` coordinates. The point
/// order is the engine's output order, so grids are deterministic:
/// building the same grid twice from the same dataset yields the same
/// sequence.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    dimensions: Vec<String>,
    points: Vec<Coord>,
}

impl Grid {
    /// Assemble a grid from dimension names and points.
    ///
    /// Callers (the strategy builders) guarantee that every point has
    /// the declared dimensionality; this is debug-asserted.
    pub fn new(dimensions: Vec<String>, points: Vec<Coord>) -> Self {
        debug_assert!(points.iter().all(|p| p.len() == dimensions.len()));
        Self { dimensions, points }
    }

    /// The ordered coordinate dimension names.
    pub fn dimensions(&self) -> &[String] {
        &self.dimensions
    }

    /// Number of coordinate dimensions.
    pub fn ndim(&self) -> usize {
        self.dimensions.len()
    }

    /// Number of reference points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// `true` if the grid has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The reference points in iteration order.
    pub fn points(&self) -> &[Coord] {
        &self.points
    }

    /// Iterate over the reference points in order.
    pub fn iter(&self) -> impl Iterator<Item = &Coord> {
        self.points.iter()
    }
}
