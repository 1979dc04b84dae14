//! The run orchestrator: select, apply, assemble.

use crate::assemble;
use crate::config::{EmptyPolicy, ErrorPolicy, ExecutorPolicy, RunOptions};
use crate::diagnostics::{RunDiagnostics, RunOutput, WindowFailure};
use crate::error::{BoxError, EngineError};
use crate::executor::{self, PointOutcome};
use crate::window::{self, WindowSpec};
use gridfold_core::{Coord, Dataset, Table};
use gridfold_grid::Grid;
use log::{debug, warn};

/// Run the window callback over every grid point and assemble one
/// output table.
///
/// For each reference point of `grid`, in iteration order, the engine
/// selects the dataset rows admitted by `window`, hands that
/// neighborhood to `window_fn` as a [`Table`], and concatenates the
/// results with the point's coordinates prepended to every row. The
/// callback contract is named by [`WindowFn`](crate::WindowFn) for
/// callers that store callbacks. Pooled
/// execution buffers and reorders results, so the output table is
/// identical across execution modes.
///
/// Empty neighborhoods never reach the callback; they are skipped or
/// null-filled per [`RunOptions::on_empty`].
///
/// # Errors
///
/// - [`EngineError::DimensionMismatch`] if the grid and dataset disagree
///   on their gridded dimensions.
/// - [`EngineError::InvalidParameter`] for an invalid window.
/// - [`EngineError::Callback`] when the callback fails under
///   [`ErrorPolicy::Fail`], carrying the failing grid point. Under
///   [`ErrorPolicy::Skip`] failures land in the diagnostics instead.
/// - [`EngineError::SchemaMismatch`] / [`EngineError::ColumnCollision`]
///   from result assembly.
pub fn run<F>(
    dataset: &Dataset,
    grid: &Grid,
    window: &WindowSpec,
    window_fn: F,
    options: &RunOptions,
) -> Result<RunOutput, EngineError>
where
    F: Fn(&Table) -> Result<Table, BoxError> + Send + Sync,
{
    if grid.dimensions() != dataset.dimensions() {
        return Err(EngineError::DimensionMismatch {
            grid: grid.dimensions().to_vec(),
            dataset: dataset.dimensions().to_vec(),
        });
    }
    window.validate(grid.ndim())?;

    let total = grid.len();
    debug!(
        "windowed run over {total} grid points, {} dataset rows, executor {:?}",
        dataset.num_rows(),
        options.executor
    );

    let coords = dataset.coords();
    let table = dataset.table();
    let eval = |index: usize| -> Result<PointOutcome, BoxError> {
        let point = &grid.points()[index];
        let indices = window::select_indices(&coords, point, window);
        if indices.is_empty() {
            return Ok(PointOutcome::Empty);
        }
        window_fn(&table.take_rows(&indices)).map(PointOutcome::Rows)
    };

    let outcomes = match options.executor {
        ExecutorPolicy::Sequential => {
            let mut outcomes = Vec::with_capacity(total);
            for index in 0..total {
                let outcome = eval(index);
                let failed = outcome.is_err();
                if let Some(progress) = &options.progress {
                    progress(index + 1, total);
                }
                outcomes.push((index, outcome));
                if failed && options.on_error == ErrorPolicy::Fail {
                    break;
                }
            }
            outcomes
        }
        ExecutorPolicy::Pooled { .. } => executor::run_pooled(
            total,
            options.executor.resolved_worker_count(),
            options.on_error == ErrorPolicy::Fail,
            options.progress.as_ref(),
            eval,
        ),
    };

    // Outcomes arrive in grid iteration order (the pool sorts), so the
    // first error seen here is the earliest grid point that failed.
    let mut diagnostics = RunDiagnostics::default();
    let mut entries: Vec<(Coord, Option<Table>)> = Vec::with_capacity(total);
    for (index, outcome) in outcomes {
        let point = grid.points()[index].clone();
        match outcome {
            Ok(PointOutcome::Rows(result)) => entries.push((point, Some(result))),
            Ok(PointOutcome::Empty) => match options.on_empty {
                EmptyPolicy::Skip => diagnostics.empty_windows += 1,
                EmptyPolicy::Fill => {
                    diagnostics.filled_windows += 1;
                    entries.push((point, None));
                }
            },
            Err(source) => match options.on_error {
                ErrorPolicy::Fail => return Err(EngineError::Callback { point, source }),
                ErrorPolicy::Skip => {
                    warn!("window callback failed at {point:?}: {source}");
                    diagnostics.failures.push(WindowFailure {
                        index,
                        point,
                        message: source.to_string(),
                    });
                }
            },
        }
    }

    let table = assemble::assemble_entries(grid.dimensions(), entries)?;
    Ok(RunOutput { table, diagnostics })
}
