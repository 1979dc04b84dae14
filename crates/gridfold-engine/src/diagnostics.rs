//! Per-run diagnostics returned alongside the assembled table.

use gridfold_core::{Coord, Table};

/// A window whose callback failed under
/// [`ErrorPolicy::Skip`](crate::ErrorPolicy::Skip).
#[derive(Clone, Debug)]
pub struct WindowFailure {
    /// The grid iteration index of the failed point.
    pub index: usize,
    /// The grid point.
    pub point: Coord,
    /// The callback error, rendered.
    pub message: String,
}

/// Counters and failure records accumulated over one run.
#[derive(Clone, Debug, Default)]
pub struct RunDiagnostics {
    /// Callbacks that failed and were skipped.
    pub failures: Vec<WindowFailure>,
    /// Grid points whose window selected no rows and were omitted.
    pub empty_windows: usize,
    /// Grid points whose window selected no rows and were emitted as
    /// null-filled rows.
    pub filled_windows: usize,
}

impl RunDiagnostics {
    /// `true` if the run completed with no skipped failures.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// The result of a run: the assembled table plus diagnostics.
#[derive(Clone, Debug)]
pub struct RunOutput {
    /// The assembled output table, in grid iteration order.
    pub table: Table,
    /// What happened along the way.
    pub diagnostics: RunDiagnostics,
}
