//! Worker-pool execution over grid indices.
//!
//! The pool is built per run from scoped threads and crossbeam channels:
//! a dispatcher feeds grid indices into a bounded task channel, workers
//! evaluate them, and the calling thread collects `(index, outcome)`
//! pairs. Collected results are sorted back into grid iteration order,
//! so pooled runs assemble the same table a sequential run would.

use crate::config::ProgressFn;
use crate::error::BoxError;
use crossbeam_channel::{bounded, unbounded};
use gridfold_core::Table;
use std::sync::atomic::{AtomicBool, Ordering};

/// What evaluating one grid point produced.
pub(crate) enum PointOutcome {
    /// The window selected no rows; the callback was not invoked.
    Empty,
    /// The callback's result table.
    Rows(Table),
}

/// Evaluate `eval(0..total)` across `workers` threads.
///
/// Returns every collected `(index, outcome)` pair sorted by index.
/// With `cancel_on_error`, the first error observed stops the
/// dispatcher; tasks already queued or in flight still finish, so the
/// lowest failing index in the result matches what a sequential run
/// would hit first. Indices never dispatched are absent.
pub(crate) fn run_pooled<F>(
    total: usize,
    workers: usize,
    cancel_on_error: bool,
    progress: Option<&ProgressFn>,
    eval: F,
) -> Vec<(usize, Result<PointOutcome, BoxError>)>
where
    F: Fn(usize) -> Result<PointOutcome, BoxError> + Sync,
{
    let cancel = AtomicBool::new(false);
    let cancel = &cancel;
    let eval = &eval;
    let (task_tx, task_rx) = bounded::<usize>(workers.max(1) * 2);
    let (result_tx, result_rx) = unbounded::<(usize, Result<PointOutcome, BoxError>)>();

    let mut results = Vec::with_capacity(total);
    std::thread::scope(|scope| {
        for _ in 0..workers.max(1) {
            let task_rx = task_rx.clone();
            let result_tx = result_tx.clone();
            scope.spawn(move || {
                // Every dequeued task is evaluated, cancelled or not:
                // dropping one could hide the earliest failure.
                for index in task_rx.iter() {
                    if result_tx.send((index, eval(index))).is_err() {
                        break;
                    }
                }
            });
        }
        // The collector's clones must not keep the channels open.
        drop(task_rx);
        drop(result_tx);

        scope.spawn(move || {
            for index in 0..total {
                if cancel.load(Ordering::Relaxed) {
                    break;
                }
                // Send fails only once every worker has exited.
                if task_tx.send(index).is_err() {
                    break;
                }
            }
        });

        let mut completed = 0usize;
        for (index, outcome) in result_rx.iter() {
            completed += 1;
            if cancel_on_error && outcome.is_err() {
                cancel.store(true, Ordering::Relaxed);
            }
            if let Some(progress) = progress {
                progress(completed, total);
            }
            results.push((index, outcome));
        }
    });

    results.sort_unstable_by_key(|(index, _)| *index);
    results
}
