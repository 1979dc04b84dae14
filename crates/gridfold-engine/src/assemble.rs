//! Result assembly: concatenating per-window tables into one output.
//!
//! Every row of a window's result table is tagged with the window's
//! reference coordinates; the coordinate columns come first, then the
//! callback columns. All non-empty results must agree on their schema
//! (same column names, in order, with pairwise-compatible kinds), and
//! no callback column may reuse a coordinate dimension name.

use crate::error::EngineError;
use gridfold_core::{Coord, Schema, Table, Value};

/// Concatenate per-window result tables into one output table.
///
/// `entries` pair each grid point with its callback result, in grid
/// iteration order. Zero-row results contribute nothing (and are exempt
/// from the schema check, so a callback may return `Table::new()` to
/// drop a window).
///
/// # Errors
///
/// - [`EngineError::InvalidParameter`] if an entry's coordinate tuple
///   does not have one coordinate per dimension.
/// - [`EngineError::SchemaMismatch`] if a non-empty result disagrees
///   with the schema established by the first non-empty result.
/// - [`EngineError::ColumnCollision`] if a callback column shares its
///   name with a coordinate dimension.
pub fn assemble(dimensions: &[String], entries: Vec<(Coord, Table)>) -> Result<Table, EngineError> {
    let entries = entries.into_iter().map(|(p, t)| (p, Some(t))).collect();
    assemble_entries(dimensions, entries)
}

/// Assembly over optional results: `None` marks a fill placeholder, an
/// empty window that should still emit one null-filled row.
pub(crate) fn assemble_entries(
    dimensions: &[String],
    entries: Vec<(Coord, Option<Table>)>,
) -> Result<Table, EngineError> {
    for (point, _) in &entries {
        if point.len() != dimensions.len() {
            return Err(EngineError::InvalidParameter {
                name: "entries",
                reason: format!(
                    "entry at {point:?} has {} coordinates, expected {}",
                    point.len(),
                    dimensions.len()
                ),
            });
        }
    }

    let mut reference: Option<(Coord, Schema)> = None;
    for (point, table) in &entries {
        if let Some(table) = table {
            if !table.is_empty() {
                let schema = table.schema();
                for (name, _) in &schema.fields {
                    if dimensions.contains(name) {
                        return Err(EngineError::ColumnCollision { name: name.clone() });
                    }
                }
                reference = Some((point.clone(), schema));
                break;
            }
        }
    }

    let mut columns: Vec<String> = dimensions.to_vec();
    if let Some((_, schema)) = &reference {
        columns.extend(schema.fields.iter().map(|(n, _)| n.clone()));
    }
    let mut out = Table::with_columns(columns);

    for (point, table) in entries {
        match table {
            Some(table) if !table.is_empty() => {
                // A non-empty entry guarantees the reference exists.
                let Some((first_point, expected)) = &reference else {
                    continue;
                };
                let actual = table.schema();
                if !expected.compatible_with(&actual) {
                    return Err(EngineError::SchemaMismatch {
                        first_point: first_point.clone(),
                        point,
                        expected: expected.clone(),
                        actual,
                    });
                }
                for row in 0..table.num_rows() {
                    let mut values: Vec<Value> =
                        point.iter().map(|&c| Value::Float(c)).collect();
                    for (name, _) in &expected.fields {
                        let v = table
                            .value(row, name)
                            .cloned()
                            .unwrap_or(Value::Null);
                        values.push(v);
                    }
                    out.push_values(values)
                        .expect("row arity matches the validated layout");
                }
            }
            // Fill placeholder: coordinates plus nulls.
            None => {
                let mut values: Vec<Value> = point.iter().map(|&c| Value::Float(c)).collect();
                let width = reference.as_ref().map(|(_, s)| s.fields.len()).unwrap_or(0);
                values.extend(std::iter::repeat(Value::Null).take(width));
                out.push_values(values)
                    .expect("row arity matches the validated layout");
            }
            // Zero-row result: nothing to contribute.
            Some(_) => {}
        }
    }
    Ok(out)
}
