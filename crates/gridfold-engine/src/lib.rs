//! The Gridfold windowed apply-combine engine.
//!
//! For each reference point of a [`Grid`](gridfold_grid::Grid), the
//! engine selects the dataset rows inside the point's window, invokes a
//! caller-supplied aggregation callback on that neighborhood, and
//! assembles the per-window results into one output table — in grid
//! iteration order, regardless of execution mode.
//!
//! Execution is sequential by default; [`ExecutorPolicy::Pooled`]
//! dispatches windows across a worker pool. Both modes produce
//! identical output tables.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod assemble;
pub mod config;
pub mod diagnostics;
pub mod engine;
pub mod error;
mod executor;
pub mod window;

pub use assemble::assemble;
pub use config::{EmptyPolicy, ErrorPolicy, ExecutorPolicy, ProgressFn, RunOptions, WindowFn};
pub use diagnostics::{RunDiagnostics, RunOutput, WindowFailure};
pub use engine::run;
pub use error::{BoxError, EngineError};
pub use window::{select, WindowSpec};
