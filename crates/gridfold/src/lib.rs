//! Gridfold: windowed split-apply-combine aggregation over
//! coordinate-indexed tabular data.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all Gridfold sub-crates. For most users, adding `gridfold` as a
//! single dependency is sufficient.
//!
//! A run has three stages: build a [`grid::Grid`] of reference points
//! over the dataset's coordinate domain, select each point's windowed
//! neighborhood, and apply a caller-supplied aggregation callback whose
//! per-window results are concatenated into one output table.
//!
//! # Quick start
//!
//! ```rust
//! use gridfold::prelude::*;
//!
//! // A small series: t = 1..=8, v = t².
//! let mut table = Table::with_columns(["t", "v"]);
//! for t in 1..=8_i64 {
//!     table
//!         .push_values(vec![Value::Float(t as f64), Value::Float((t * t) as f64)])
//!         .unwrap();
//! }
//! let dataset = Dataset::new(table, ["t"]).unwrap();
//!
//! // Four evenly spaced reference points over the observed extent.
//! let grid = build_grid(&dataset, &GridSpec::new(["t"], 4)).unwrap().grid;
//!
//! // Mean of `v` over each window of radius 1.5.
//! let mean_v = |t: &Table| -> Result<Table, BoxError> {
//!     let col = t.column("v").ok_or("missing column 'v'")?;
//!     let sum: f64 = col.iter().filter_map(Value::as_f64).sum();
//!     let mut out = Table::with_columns(["mean_v"]);
//!     out.push_values(vec![Value::Float(sum / col.len() as f64)])?;
//!     Ok(out)
//! };
//! let out = run(
//!     &dataset,
//!     &grid,
//!     &WindowSpec::Radius(1.5),
//!     mean_v,
//!     &RunOptions::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     out.table.column_names().collect::<Vec<_>>(),
//!     vec!["t", "mean_v"]
//! );
//! assert_eq!(out.table.num_rows(), 4);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `gridfold-core` | `Value`, `Table`, `Dataset`, `Coord`, schemas |
//! | [`hull`] | `gridfold-hull` | 2-D alpha shapes for boundary cropping |
//! | [`grid`] | `gridfold-grid` | Grid strategies, specs, and builders |
//! | [`engine`] | `gridfold-engine` | Windows, policies, and the run loop |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Tabular data model (`gridfold-core`).
///
/// [`types::Table`] is the currency of the whole API: the input dataset,
/// each window's neighborhood, each callback result, and the assembled
/// output are all tables.
pub use gridfold_core as types;

/// 2-D alpha shapes (`gridfold-hull`).
///
/// [`hull::AlphaShape`] approximates a point cloud's occupied region;
/// the `AhullCrop` and `AhullFill` grid strategies crop lattices to it.
pub use gridfold_hull as hull;

/// Reference-grid generation (`gridfold-grid`).
///
/// [`grid::build_grid`] dispatches on [`grid::GridStrategy`]; each
/// strategy is also independently callable for precomputed grids.
pub use gridfold_grid as grid;

/// The windowed apply-combine engine (`gridfold-engine`).
///
/// [`engine::run`] drives neighborhood selection, callback dispatch
/// (sequential or pooled), and result assembly.
pub use gridfold_engine as engine;

/// Common imports for typical Gridfold usage.
///
/// ```rust
/// use gridfold::prelude::*;
/// ```
pub mod prelude {
    // Data model
    pub use gridfold_core::{Coord, Dataset, Schema, Table, TableError, Value, ValueKind};

    // Boundary shapes
    pub use gridfold_hull::{AlphaShape, HullError};

    // Grids
    pub use gridfold_grid::{
        build_grid, Convergence, Grid, GridError, GridOutcome, GridSpec, GridStrategy,
    };

    // Engine
    pub use gridfold_engine::{
        run, BoxError, EmptyPolicy, EngineError, ErrorPolicy, ExecutorPolicy, RunDiagnostics,
        RunOptions, RunOutput, WindowFn, WindowSpec,
    };
}
