//! Grid specification: strategy selection and options.

use crate::grid::Grid;

/// The grid-generation strategy.
///
/// `Identical` works in any dimensionality; the other three are 2-D
/// lattices and reject other dimensionalities with
/// [`GridError::UnsupportedDimension`](crate::GridError::UnsupportedDimension).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridStrategy {
    /// Evenly spaced per-axis points spanning each dimension's observed
    /// min/max; the grid is the Cartesian product, so the point count is
    /// `k^D` for the smallest `k` with `k^D >= target`.
    Identical,
    /// A 2-D lattice with one spacing common to both axes, sized so the
    /// bounding box yields approximately the target count. No boundary
    /// filtering.
    SquareTile,
    /// A SquareTile lattice cropped to the dataset's alpha-shape
    /// boundary. The retained count is generally below the target and is
    /// not adjusted further.
    AhullCrop,
    /// Iterative density search: re-runs the lattice-and-crop step with
    /// adjusted spacing until the retained count is close to the target.
    /// The most expensive strategy — boundary membership is recomputed
    /// for every candidate lattice.
    AhullFill,
}

impl GridStrategy {
    /// Stable name, used in errors and logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::Identical => "identical",
            Self::SquareTile => "squaretile",
            Self::AhullCrop => "ahull_crop",
            Self::AhullFill => "ahull_fill",
        }
    }
}

/// Configuration for [`build_grid`](crate::build_grid).
///
/// # Examples
///
/// ```
/// use gridfold_grid::{GridSpec, GridStrategy};
///
/// let spec = GridSpec::new(["x", "y"], 500)
///     .strategy(GridStrategy::AhullFill)
///     .alpha(1.5)
///     .verbose(true);
/// assert_eq!(spec.target_points, 500);
/// ```
#[derive(Clone, Debug)]
pub struct GridSpec {
    /// Ordered coordinate dimension names to grid over.
    pub dimensions: Vec<String>,
    /// Target number of reference points. Strategies treat this as a
    /// goal, not a guarantee — see each variant's documentation.
    pub target_points: usize,
    /// The strategy to use. Default: [`GridStrategy::Identical`].
    pub strategy: GridStrategy,
    /// Boundary shape parameter for the ahull strategies. `None` selects
    /// a default of one quarter of the bounding-box diagonal.
    pub alpha: Option<f64>,
    /// Emit a `debug!` line per AhullFill iteration.
    pub verbose: bool,
    /// A pre-built grid. When set, [`build_grid`](crate::build_grid)
    /// returns it unchanged, skipping generation entirely — this lets a
    /// caller amortize an expensive AhullFill run across repeated runs
    /// with different aggregation callbacks.
    pub pregenerated: Option<Grid>,
}

impl GridSpec {
    /// Create a spec with the default strategy and no options set.
    pub fn new<I, S>(dimensions: I, target_points: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            dimensions: dimensions.into_iter().map(Into::into).collect(),
            target_points,
            strategy: GridStrategy::Identical,
            alpha: None,
            verbose: false,
            pregenerated: None,
        }
    }

    /// Set the strategy.
    pub fn strategy(mut self, strategy: GridStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the alpha-shape parameter.
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = Some(alpha);
        self
    }

    /// Enable or disable per-iteration reporting.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Supply a pre-built grid, bypassing generation.
    pub fn pregenerated(mut self, grid: Grid) -> Self {
        self.pregenerated = Some(grid);
        self
    }
}
