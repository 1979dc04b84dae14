//! Datasets: a table plus its gridded coordinate dimensions.

use crate::error::TableError;
use crate::table::Table;
use crate::Coord;
use smallvec::SmallVec;

/// A read-only table annotated with the ordered coordinate dimensions to
/// grid and window over.
///
/// Rows whose coordinate values are missing or non-finite have no usable
/// position: [`coord_of`](Self::coord_of) returns `None` for them and
/// they never match any window.
///
/// # Examples
///
/// ```
/// use gridfold_core::{Dataset, Table, Value};
///
/// let mut t = Table::with_columns(["t", "v"]);
/// t.push_values(vec![Value::Float(1.0), Value::Float(10.0)]).unwrap();
/// t.push_values(vec![Value::Null, Value::Float(20.0)]).unwrap();
///
/// let ds = Dataset::new(t, ["t"]).unwrap();
/// assert_eq!(ds.coord_of(0).unwrap()[0], 1.0);
/// assert!(ds.coord_of(1).is_none()); // missing coordinate
/// ```
#[derive(Clone, Debug)]
pub struct Dataset {
    table: Table,
    dimensions: Vec<String>,
}

impl Dataset {
    /// Wrap a table, declaring its coordinate dimensions.
    ///
    /// # Errors
    ///
    /// [`TableError::UnknownColumn`] if a named dimension does not exist
    /// in the table.
    pub fn new<I, S>(table: Table, dimensions: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let dimensions: Vec<String> = dimensions.into_iter().map(Into::into).collect();
        for dim in &dimensions {
            if table.column(dim).is_none() {
                return Err(TableError::UnknownColumn { name: dim.clone() });
            }
        }
        Ok(Self { table, dimensions })
    }

    /// The underlying table.
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// The ordered coordinate dimension names.
    pub fn dimensions(&self) -> &[String] {
        &self.dimensions
    }

    /// Number of coordinate dimensions.
    pub fn ndim(&self) -> usize {
        self.dimensions.len()
    }

    /// Number of rows.
    pub fn num_rows(&self) -> usize {
        self.table.num_rows()
    }

    /// The coordinate tuple of a row, or `None` if any coordinate value
    /// in that row is missing, non-numeric, or non-finite.
    pub fn coord_of(&self, row: usize) -> Option<Coord> {
        let mut coord: Coord = SmallVec::with_capacity(self.dimensions.len());
        for dim in &self.dimensions {
            let v = self.table.value(row, dim)?.as_f64()?;
            if !v.is_finite() {
                return None;
            }
            coord.push(v);
        }
        Some(coord)
    }

    /// Per-row coordinates for every row, `None` where unusable.
    ///
    /// Precomputed once by grid builders and the windowing engine so the
    /// per-window inner loop touches plain floats.
    pub fn coords(&self) -> Vec<Option<Coord>> {
        (0..self.table.num_rows()).map(|r| self.coord_of(r)).collect()
    }
}
