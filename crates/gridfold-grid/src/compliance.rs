//! Shared compliance checks that every grid strategy must pass.
//!
//! Called from each strategy's test module with a well-formed 2-D
//! dataset (≥ 3 distinct, non-collinear coordinate points).

use crate::extent::{finite_coords, observed_extents};
use crate::spec::{GridSpec, GridStrategy};
use crate::strategy::build_grid;
use gridfold_core::Dataset;

/// Run the full strategy compliance suite.
///
/// Checks, for a target of 40 points:
/// - the build succeeds and yields a non-empty grid;
/// - every point has the requested dimensionality;
/// - every point lies within the observed bounding box;
/// - rebuilding produces an identical grid (determinism).
pub(crate) fn run_strategy_compliance(dataset: &Dataset, strategy: GridStrategy) {
    let dims: Vec<String> = dataset.dimensions().to_vec();
    let spec = GridSpec::new(dims.clone(), 40).strategy(strategy);

    let outcome = build_grid(dataset, &spec)
        .unwrap_or_else(|e| panic!("{} failed: {e}", strategy.name()));
    let grid = &outcome.grid;

    assert!(!grid.is_empty(), "{}: empty grid", strategy.name());
    assert_eq!(grid.ndim(), dims.len());
    assert!(grid.iter().all(|p| p.len() == dims.len()));

    let coords = finite_coords(dataset, &dims).unwrap();
    let extents = observed_extents(&coords, dims.len()).unwrap();
    let tolerance = 1e-9;
    for p in grid.iter() {
        for (axis, &v) in p.iter().enumerate() {
            assert!(
                v >= extents[axis].min - tolerance && v <= extents[axis].max + tolerance,
                "{}: point {p:?} outside axis {axis} extent",
                strategy.name()
            );
        }
    }

    let again = build_grid(dataset, &spec).unwrap();
    assert_eq!(grid, &again.grid, "{}: non-deterministic", strategy.name());
}
