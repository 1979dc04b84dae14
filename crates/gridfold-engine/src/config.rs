//! Run configuration: the callback contract, policies, executor
//! selection, and the progress hook.

use crate::error::BoxError;
use gridfold_core::Table;
use std::fmt;

/// The window aggregation callback: neighborhood table in, result table
/// out. Extra caller arguments are closure captures.
///
/// [`run`](crate::run) accepts any matching closure directly; this
/// alias names the contract for callers that store callbacks, as
/// `Box<WindowFn>` or `Arc<WindowFn>`.
pub type WindowFn = dyn Fn(&Table) -> Result<Table, BoxError> + Send + Sync;

/// What to do with a grid point whose window selects no rows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmptyPolicy {
    /// Omit the point from the output table.
    #[default]
    Skip,
    /// Emit one output row with the point's coordinates and nulls in
    /// every callback column.
    Fill,
}

/// What to do when the window callback fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Stop dispatching, drain in-flight work, and surface the failure
    /// as [`EngineError::Callback`](crate::EngineError::Callback).
    #[default]
    Fail,
    /// Omit the point and record the failure in the run diagnostics.
    Skip,
}

/// How grid points are executed.
///
/// Both modes produce identical output tables: parallel results are
/// buffered and reordered into grid iteration order before assembly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExecutorPolicy {
    /// One point at a time, on the calling thread.
    #[default]
    Sequential,
    /// A worker pool of `workers` threads. `None` auto-detects
    /// (`available_parallelism / 2`, clamped to `[2, 16]`).
    Pooled {
        /// Number of worker threads, or `None` to auto-detect.
        workers: Option<usize>,
    },
}

impl ExecutorPolicy {
    /// Resolve the actual worker count for `Pooled`, applying
    /// auto-detection if `None`. Explicit values are clamped to
    /// `[1, 64]`. `Sequential` resolves to 1.
    pub fn resolved_worker_count(&self) -> usize {
        match self {
            Self::Sequential => 1,
            Self::Pooled { workers: Some(n) } => (*n).clamp(1, 64),
            Self::Pooled { workers: None } => {
                let cpus = std::thread::available_parallelism()
                    .map(|n| n.get())
                    .unwrap_or(4);
                (cpus / 2).clamp(2, 16)
            }
        }
    }
}

/// Progress hook: called with `(completed, total)` after each grid
/// point completes, from the collecting thread, in every execution
/// mode. Completion order is not grid order under a pooled executor.
pub type ProgressFn = Box<dyn Fn(usize, usize) + Send + Sync>;

/// Options for [`run`](crate::run).
pub struct RunOptions {
    /// Empty-neighborhood handling. Default: [`EmptyPolicy::Skip`].
    pub on_empty: EmptyPolicy,
    /// Callback-failure handling. Default: [`ErrorPolicy::Fail`].
    pub on_error: ErrorPolicy,
    /// Execution mode. Default: [`ExecutorPolicy::Sequential`].
    pub executor: ExecutorPolicy,
    /// Optional progress hook.
    pub progress: Option<ProgressFn>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            on_empty: EmptyPolicy::Skip,
            on_error: ErrorPolicy::Fail,
            executor: ExecutorPolicy::Sequential,
            progress: None,
        }
    }
}

impl fmt::Debug for RunOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunOptions")
            .field("on_empty", &self.on_empty)
            .field("on_error", &self.on_error)
            .field("executor", &self.executor)
            .field("progress", &self.progress.is_some())
            .finish()
    }
}
