//! The non-iterative grid builders and the `build_grid` dispatcher.

use crate::error::GridError;
use crate::extent::{finite_coords, observed_extents, AxisExtent};
use crate::fill::{build_grid_ahull_fill, Convergence};
use crate::grid::Grid;
use crate::spec::{GridSpec, GridStrategy};
use gridfold_core::{Coord, Dataset};
use gridfold_hull::AlphaShape;
use smallvec::smallvec;

/// A built grid together with how its strategy terminated.
///
/// The non-iterative strategies always report [`Convergence::Exact`];
/// AhullFill reports whether its density search hit the tolerance band
/// or exhausted its budget (returning the best candidate found).
#[derive(Clone, Debug)]
pub struct GridOutcome {
    /// The reference grid.
    pub grid: Grid,
    /// How the strategy terminated.
    pub convergence: Convergence,
}

/// Build a grid according to `spec`.
///
/// If `spec.pregenerated` is set, the grid is returned unchanged (after
/// a dimension check) and no computation is performed.
///
/// # Errors
///
/// - [`GridError::InvalidParameter`] for a zero target or a
///   pregenerated grid whose dimensions disagree with the spec.
/// - [`GridError::UnknownDimension`] / [`GridError::EmptyDomain`] /
///   [`GridError::DegenerateExtent`] for unusable coordinate domains.
/// - [`GridError::UnsupportedDimension`] when a 2-D-only strategy is
///   requested for another dimensionality.
/// - [`GridError::Hull`] when boundary construction fails.
pub fn build_grid(dataset: &Dataset, spec: &GridSpec) -> Result<GridOutcome, GridError> {
    if let Some(grid) = &spec.pregenerated {
        if grid.dimensions() != spec.dimensions.as_slice() {
            return Err(GridError::InvalidParameter {
                name: "pregenerated",
                reason: format!(
                    "grid dimensions {:?} do not match spec dimensions {:?}",
                    grid.dimensions(),
                    spec.dimensions
                ),
            });
        }
        return Ok(GridOutcome {
            grid: grid.clone(),
            convergence: Convergence::Exact,
        });
    }

    validate_target(spec.target_points)?;

    match spec.strategy {
        GridStrategy::Identical => {
            let grid = build_grid_identical(dataset, &spec.dimensions, spec.target_points)?;
            Ok(GridOutcome {
                grid,
                convergence: Convergence::Exact,
            })
        }
        GridStrategy::SquareTile => {
            let grid = build_grid_squaretile(dataset, &spec.dimensions, spec.target_points)?;
            Ok(GridOutcome {
                grid,
                convergence: Convergence::Exact,
            })
        }
        GridStrategy::AhullCrop => {
            let grid =
                build_grid_ahull_crop(dataset, &spec.dimensions, spec.target_points, spec.alpha)?;
            Ok(GridOutcome {
                grid,
                convergence: Convergence::Exact,
            })
        }
        GridStrategy::AhullFill => {
            let (grid, convergence) = build_grid_ahull_fill(
                dataset,
                &spec.dimensions,
                spec.target_points,
                spec.alpha,
                spec.verbose,
            )?;
            Ok(GridOutcome { grid, convergence })
        }
    }
}

/// Build an `Identical`-strategy grid: `k` evenly spaced points per axis
/// (inclusive of the observed min and max), Cartesian product, where `k`
/// is the smallest count with `k^D >= target`.
///
/// Zero-extent axes collapse to a single coordinate.
pub fn build_grid_identical(
    dataset: &Dataset,
    dims: &[String],
    target: usize,
) -> Result<Grid, GridError> {
    validate_target(target)?;
    let coords = finite_coords(dataset, dims)?;
    let extents = observed_extents(&coords, dims.len())?;

    let k = per_axis_count(target, dims.len());
    let axes: Vec<Vec<f64>> = extents.iter().map(|e| linspace(e, k)).collect();

    let mut points: Vec<Coord> = vec![smallvec![]];
    for axis in &axes {
        let mut next = Vec::with_capacity(points.len() * axis.len());
        for partial in &points {
            for &v in axis {
                let mut p = partial.clone();
                p.push(v);
                next.push(p);
            }
        }
        points = next;
    }

    Ok(Grid::new(dims.to_vec(), points))
}

/// Build a `SquareTile`-strategy grid (2-D only): an axis-aligned
/// lattice with a single spacing `s` solved from
/// `target ≈ (width / s) * (height / s)`.
pub fn build_grid_squaretile(
    dataset: &Dataset,
    dims: &[String],
    target: usize,
) -> Result<Grid, GridError> {
    validate_target(target)?;
    require_2d("squaretile", dims)?;
    let coords = finite_coords(dataset, dims)?;
    let extents = observed_extents(&coords, 2)?;
    let spacing = squaretile_spacing(&extents, dims, target)?;
    Ok(Grid::new(dims.to_vec(), lattice_2d(&extents, spacing)))
}

/// Build an `AhullCrop`-strategy grid (2-D only): a SquareTile lattice
/// with every point outside the dataset's alpha shape discarded.
///
/// `alpha = None` selects the default (a quarter of the bounding-box
/// diagonal). The retained count is generally below `target` and is not
/// adjusted further.
pub fn build_grid_ahull_crop(
    dataset: &Dataset,
    dims: &[String],
    target: usize,
    alpha: Option<f64>,
) -> Result<Grid, GridError> {
    validate_target(target)?;
    require_2d("ahull_crop", dims)?;
    let coords = finite_coords(dataset, dims)?;
    let extents = observed_extents(&coords, 2)?;
    let spacing = squaretile_spacing(&extents, dims, target)?;
    let shape = build_shape(&coords, &extents, alpha)?;
    let points = crop_lattice(&extents, spacing, &shape);
    Ok(Grid::new(dims.to_vec(), points))
}

// ── shared helpers ─────────────────────────────────────────────────

pub(crate) fn validate_target(target: usize) -> Result<(), GridError> {
    if target == 0 {
        return Err(GridError::InvalidParameter {
            name: "target_points",
            reason: "must be at least 1".to_string(),
        });
    }
    Ok(())
}

pub(crate) fn require_2d(strategy: &'static str, dims: &[String]) -> Result<(), GridError> {
    if dims.len() != 2 {
        return Err(GridError::UnsupportedDimension {
            strategy,
            expected: 2,
            actual: dims.len(),
        });
    }
    Ok(())
}

/// Smallest per-axis count `k >= 1` with `k^ndim >= target`.
pub(crate) fn per_axis_count(target: usize, ndim: usize) -> usize {
    let mut k = 1usize;
    while (k as f64).powi(ndim as i32) < target as f64 {
        k += 1;
    }
    k
}

/// `k` evenly spaced values spanning the extent, endpoints inclusive.
/// Collapsed axes (and `k == 1`) yield the single value `min`.
pub(crate) fn linspace(extent: &AxisExtent, k: usize) -> Vec<f64> {
    if k <= 1 || extent.span() == 0.0 {
        return vec![extent.min];
    }
    let step = extent.span() / (k - 1) as f64;
    (0..k).map(|i| extent.min + i as f64 * step).collect()
}

/// Solve the single lattice spacing from the bounding-box area.
pub(crate) fn squaretile_spacing(
    extents: &[AxisExtent],
    dims: &[String],
    target: usize,
) -> Result<f64, GridError> {
    for (extent, dim) in extents.iter().zip(dims) {
        if extent.span() == 0.0 {
            return Err(GridError::DegenerateExtent {
                dimension: dim.clone(),
            });
        }
    }
    let area = extents[0].span() * extents[1].span();
    Ok((area / target as f64).sqrt())
}

/// Axis-aligned lattice over the bounding box with the given spacing,
/// ordered by the first axis, then the second.
pub(crate) fn lattice_2d(extents: &[AxisExtent], spacing: f64) -> Vec<Coord> {
    let axis = |extent: &AxisExtent| -> Vec<f64> {
        let tolerance = spacing * 1e-9;
        let mut values = Vec::new();
        let mut i = 0u64;
        loop {
            let v = extent.min + i as f64 * spacing;
            if v > extent.max + tolerance {
                break;
            }
            values.push(v);
            i += 1;
        }
        values
    };
    let xs = axis(&extents[0]);
    let ys = axis(&extents[1]);
    let mut points = Vec::with_capacity(xs.len() * ys.len());
    for &x in &xs {
        for &y in &ys {
            points.push(smallvec![x, y]);
        }
    }
    points
}

/// Lattice-and-crop: the AhullCrop kernel, reused per AhullFill iteration.
pub(crate) fn crop_lattice(
    extents: &[AxisExtent],
    spacing: f64,
    shape: &AlphaShape,
) -> Vec<Coord> {
    lattice_2d(extents, spacing)
        .into_iter()
        .filter(|p| shape.contains([p[0], p[1]]))
        .collect()
}

/// Build the dataset's boundary shape, applying the default alpha (a
/// quarter of the bounding-box diagonal) when none is given.
pub(crate) fn build_shape(
    coords: &[Coord],
    extents: &[AxisExtent],
    alpha: Option<f64>,
) -> Result<AlphaShape, GridError> {
    let alpha = alpha.unwrap_or_else(|| default_alpha(extents));
    let pairs: Vec<[f64; 2]> = coords.iter().map(|c| [c[0], c[1]]).collect();
    Ok(AlphaShape::build(&pairs, alpha)?)
}

/// Default alpha: one quarter of the bounding-box diagonal.
pub(crate) fn default_alpha(extents: &[AxisExtent]) -> f64 {
    let diag = (extents[0].span().powi(2) + extents[1].span().powi(2)).sqrt();
    diag / 4.0
}
