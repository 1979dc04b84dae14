//! Integration test: the full select → apply → assemble pipeline.
//!
//! Runs hand-checkable scenarios end to end: a spiked series whose
//! per-window means are known exactly, empty-window policies, and
//! callback-failure policies.

use gridfold_core::{Dataset, Table, Value};
use gridfold_engine::{
    run, BoxError, EmptyPolicy, EngineError, ErrorPolicy, RunOptions, WindowFn, WindowSpec,
};
use gridfold_grid::{build_grid, Grid, GridSpec};
use gridfold_test_utils::spike_series;
use smallvec::smallvec;

// ── callbacks ────────────────────────────────────────────────────────

/// One-row result: the mean of the neighborhood's `v` column.
fn mean_of_v(t: &Table) -> Result<Table, BoxError> {
    let col = t.column("v").ok_or("missing column 'v'")?;
    let sum: f64 = col.iter().filter_map(Value::as_f64).sum();
    let mut out = Table::with_columns(["mean"]);
    out.push_values(vec![Value::Float(sum / col.len() as f64)])?;
    Ok(out)
}

/// Fails whenever the neighborhood contains a `v` above the threshold.
fn fail_on_spike(t: &Table) -> Result<Table, BoxError> {
    let col = t.column("v").ok_or("missing column 'v'")?;
    if col.iter().filter_map(Value::as_f64).any(|v| v > 50.0) {
        return Err("spike in neighborhood".into());
    }
    mean_of_v(t)
}

// ── scenarios ────────────────────────────────────────────────────────

#[test]
fn spiked_series_means_match_hand_computed_windows() {
    // t = 1..=12, v = 1 except v = 100 at t = 12. An Identical grid
    // with target 4 lands points at t = 1, 4.667, 8.333, 12; radius 2
    // gives windows {1,2,3}, {3..6}, {7..10}, {10,11,12}.
    let ds = spike_series(12, 12, 100.0);
    let outcome = build_grid(&ds, &GridSpec::new(["t"], 4)).unwrap();
    let out = run(
        &ds,
        &outcome.grid,
        &WindowSpec::Radius(2.0),
        mean_of_v,
        &RunOptions::default(),
    )
    .unwrap();

    assert_eq!(
        out.table.column_names().collect::<Vec<_>>(),
        vec!["t", "mean"]
    );
    assert_eq!(out.table.num_rows(), 4);
    for row in 0..3 {
        assert_eq!(out.table.value(row, "mean"), Some(&Value::Float(1.0)));
    }
    // Last window: (1 + 1 + 100) / 3.
    assert_eq!(out.table.value(3, "mean"), Some(&Value::Float(34.0)));
    assert_eq!(out.table.value(3, "t"), Some(&Value::Float(12.0)));
    assert!(out.diagnostics.is_clean());
    assert_eq!(out.diagnostics.empty_windows, 0);
}

#[test]
fn stored_boxed_callbacks_are_runnable() {
    // Callbacks held behind the named contract run like plain closures.
    let callback: Box<WindowFn> = Box::new(mean_of_v);
    let ds = spike_series(12, 12, 100.0);
    let outcome = build_grid(&ds, &GridSpec::new(["t"], 4)).unwrap();
    let out = run(
        &ds,
        &outcome.grid,
        &WindowSpec::Radius(2.0),
        callback,
        &RunOptions::default(),
    )
    .unwrap();
    assert_eq!(out.table.num_rows(), 4);
    assert_eq!(out.table.value(3, "mean"), Some(&Value::Float(34.0)));
}

#[test]
fn reruns_are_identical() {
    let ds = spike_series(12, 12, 100.0);
    let outcome = build_grid(&ds, &GridSpec::new(["t"], 4)).unwrap();
    let window = WindowSpec::Radius(2.0);
    let a = run(&ds, &outcome.grid, &window, mean_of_v, &RunOptions::default()).unwrap();
    let b = run(&ds, &outcome.grid, &window, mean_of_v, &RunOptions::default()).unwrap();
    assert_eq!(a.table, b.table);
}

#[test]
fn empty_windows_are_skipped_by_default() {
    // One grid point sits far outside the data.
    let ds = spike_series(5, 1, 1.0);
    let grid = Grid::new(
        vec!["t".to_string()],
        vec![smallvec![3.0], smallvec![1000.0]],
    );
    let out = run(
        &ds,
        &grid,
        &WindowSpec::Radius(2.0),
        mean_of_v,
        &RunOptions::default(),
    )
    .unwrap();
    assert_eq!(out.table.num_rows(), 1);
    assert_eq!(out.diagnostics.empty_windows, 1);
    assert_eq!(out.diagnostics.filled_windows, 0);
}

#[test]
fn empty_windows_fill_with_nulls_when_asked() {
    let ds = spike_series(5, 1, 1.0);
    let grid = Grid::new(
        vec!["t".to_string()],
        vec![smallvec![3.0], smallvec![1000.0]],
    );
    let options = RunOptions {
        on_empty: EmptyPolicy::Fill,
        ..RunOptions::default()
    };
    let out = run(&ds, &grid, &WindowSpec::Radius(2.0), mean_of_v, &options).unwrap();
    assert_eq!(out.table.num_rows(), 2);
    assert_eq!(out.table.value(1, "t"), Some(&Value::Float(1000.0)));
    assert_eq!(out.table.value(1, "mean"), Some(&Value::Null));
    assert_eq!(out.diagnostics.filled_windows, 1);
}

#[test]
fn error_policy_fail_names_the_failing_point() {
    let ds = spike_series(12, 12, 100.0);
    let outcome = build_grid(&ds, &GridSpec::new(["t"], 4)).unwrap();
    let err = run(
        &ds,
        &outcome.grid,
        &WindowSpec::Radius(2.0),
        fail_on_spike,
        &RunOptions::default(),
    )
    .unwrap_err();
    match err {
        EngineError::Callback { point, source } => {
            // Only the last window (around t = 12) sees the spike.
            assert_eq!(point[0], 12.0);
            assert_eq!(source.to_string(), "spike in neighborhood");
        }
        other => panic!("expected Callback, got {other:?}"),
    }
}

#[test]
fn error_policy_skip_records_the_failure_and_keeps_going() {
    let ds = spike_series(12, 12, 100.0);
    let outcome = build_grid(&ds, &GridSpec::new(["t"], 4)).unwrap();
    let options = RunOptions {
        on_error: ErrorPolicy::Skip,
        ..RunOptions::default()
    };
    let out = run(
        &ds,
        &outcome.grid,
        &WindowSpec::Radius(2.0),
        fail_on_spike,
        &options,
    )
    .unwrap();
    assert_eq!(out.table.num_rows(), 3);
    assert_eq!(out.diagnostics.failures.len(), 1);
    let failure = &out.diagnostics.failures[0];
    assert_eq!(failure.index, 3);
    assert_eq!(failure.point[0], 12.0);
    assert!(failure.message.contains("spike"));
}

#[test]
fn progress_hook_counts_every_point() {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    let ds = spike_series(12, 12, 100.0);
    let outcome = build_grid(&ds, &GridSpec::new(["t"], 4)).unwrap();
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&calls);
    let options = RunOptions {
        progress: Some(Box::new(move |completed, total| {
            assert_eq!(total, 4);
            assert!(completed <= total);
            seen.fetch_add(1, Ordering::Relaxed);
        })),
        ..RunOptions::default()
    };
    run(&ds, &outcome.grid, &WindowSpec::Radius(2.0), mean_of_v, &options).unwrap();
    assert_eq!(calls.load(Ordering::Relaxed), 4);
}

#[test]
fn multi_row_results_are_concatenated_with_coordinates() {
    // A callback that returns the whole neighborhood, renamed.
    let echo = |t: &Table| -> Result<Table, BoxError> {
        let col = t.column("v").ok_or("missing column 'v'")?;
        let mut out = Table::with_columns(["value"]);
        for v in col {
            out.push_values(vec![v.clone()])?;
        }
        Ok(out)
    };
    let ds = spike_series(4, 1, 1.0);
    let grid = Grid::new(vec!["t".to_string()], vec![smallvec![2.0]]);
    let out = run(&ds, &grid, &WindowSpec::Radius(1.0), echo, &RunOptions::default()).unwrap();
    // Window around t = 2 selects t = 1, 2, 3.
    assert_eq!(out.table.num_rows(), 3);
    for row in 0..3 {
        assert_eq!(out.table.value(row, "t"), Some(&Value::Float(2.0)));
    }
}

#[test]
fn callback_reusing_a_dimension_name_is_rejected() {
    let echo_t = |t: &Table| -> Result<Table, BoxError> {
        Ok(t.take_rows(&[0]))
    };
    let ds = spike_series(4, 1, 1.0);
    let grid = Grid::new(vec!["t".to_string()], vec![smallvec![2.0]]);
    let err = run(
        &ds,
        &grid,
        &WindowSpec::Radius(1.0),
        echo_t,
        &RunOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, EngineError::ColumnCollision { name } if name == "t"));
}

#[test]
fn inconsistent_callback_schemas_are_rejected() {
    // The output column name depends on the window position, so the
    // second window's schema disagrees with the first's.
    let fickle = |t: &Table| -> Result<Table, BoxError> {
        let first = t.value(0, "t").and_then(Value::as_f64).unwrap_or(0.0);
        let name = if first < 3.0 { "a" } else { "b" };
        let mut out = Table::with_columns([name]);
        out.push_values(vec![Value::Float(1.0)])?;
        Ok(out)
    };
    let ds = spike_series(6, 1, 1.0);
    let grid = Grid::new(
        vec!["t".to_string()],
        vec![smallvec![2.0], smallvec![5.0]],
    );
    let err = run(
        &ds,
        &grid,
        &WindowSpec::Radius(1.0),
        fickle,
        &RunOptions::default(),
    )
    .unwrap_err();
    match err {
        EngineError::SchemaMismatch {
            first_point, point, ..
        } => {
            assert_eq!(first_point[0], 2.0);
            assert_eq!(point[0], 5.0);
        }
        other => panic!("expected SchemaMismatch, got {other:?}"),
    }
}

#[test]
fn dataset_rows_reused_by_overlapping_windows() {
    let ds = spike_series(5, 1, 1.0);
    let grid = Grid::new(
        vec!["t".to_string()],
        vec![smallvec![2.0], smallvec![3.0]],
    );
    let count_rows = |t: &Table| -> Result<Table, BoxError> {
        let mut out = Table::with_columns(["n"]);
        out.push_values(vec![Value::Int(t.num_rows() as i64)])?;
        Ok(out)
    };
    let out = run(
        &ds,
        &grid,
        &WindowSpec::Radius(1.5),
        count_rows,
        &RunOptions::default(),
    )
    .unwrap();
    // Both windows span 3 rows; the overlap (t = 2, 3) is in both.
    assert_eq!(out.table.value(0, "n"), Some(&Value::Int(3)));
    assert_eq!(out.table.value(1, "n"), Some(&Value::Int(3)));
}
