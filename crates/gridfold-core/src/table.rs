//! Ordered-column tables.
//!
//! [`Table`] is the tabular currency of the whole workspace: the caller's
//! dataset, each window's neighborhood projection, each callback result,
//! and the assembled output are all tables. Columns are named, ordered
//! (insertion order, via `IndexMap`), and of equal length.

use crate::error::TableError;
use crate::value::{Value, ValueKind};
use indexmap::IndexMap;
use std::fmt;

/// An ordered collection of equally-long named columns.
///
/// # Examples
///
/// ```
/// use gridfold_core::{Table, Value};
///
/// let mut t = Table::with_columns(["t", "v"]);
/// t.push_values(vec![Value::Float(1.0), Value::Float(10.0)]).unwrap();
/// t.push_values(vec![Value::Float(2.0), Value::Float(20.0)]).unwrap();
///
/// assert_eq!(t.num_rows(), 2);
/// assert_eq!(t.column("v").unwrap()[1], Value::Float(20.0));
///
/// let head = t.take_rows(&[0]);
/// assert_eq!(head.num_rows(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    columns: IndexMap<String, Vec<Value>>,
    rows: usize,
}

impl Table {
    /// Create an empty table with no columns.
    ///
    /// The column layout is fixed by the first [`push_row`](Self::push_row)
    /// call (or by constructing with [`with_columns`](Self::with_columns)).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty table with the given column layout.
    pub fn with_columns<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns = names
            .into_iter()
            .map(|n| (n.into(), Vec::new()))
            .collect::<IndexMap<_, _>>();
        Self { columns, rows: 0 }
    }

    /// Number of rows.
    pub fn num_rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// `true` if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Column names in layout order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// The values of a column, or `None` if the column does not exist.
    pub fn column(&self, name: &str) -> Option<&[Value]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    /// The value at `(row, column)`, or `None` if either is out of range.
    pub fn value(&self, row: usize, column: &str) -> Option<&Value> {
        self.columns.get(column).and_then(|c| c.get(row))
    }

    /// Append a row of `(column, value)` pairs.
    ///
    /// On a table with no columns yet, the row defines the layout. On a
    /// table with columns, the pairs must match the layout in order.
    ///
    /// # Errors
    ///
    /// [`TableError::LengthMismatch`] on arity mismatch,
    /// [`TableError::ColumnMismatch`] when a name disagrees with the
    /// layout.
    pub fn push_row(&mut self, row: &[(&str, Value)]) -> Result<(), TableError> {
        if self.columns.is_empty() && self.rows == 0 {
            for (name, _) in row {
                self.columns.insert((*name).to_string(), Vec::new());
            }
        }
        if row.len() != self.columns.len() {
            return Err(TableError::LengthMismatch {
                expected: self.columns.len(),
                actual: row.len(),
            });
        }
        for (i, (name, _)) in row.iter().enumerate() {
            let expected = self.columns.get_index(i).map(|(k, _)| k.as_str());
            if expected != Some(*name) {
                return Err(TableError::ColumnMismatch {
                    expected: expected.unwrap_or("").to_string(),
                    actual: (*name).to_string(),
                });
            }
        }
        for (i, (_, value)) in row.iter().enumerate() {
            if let Some((_, col)) = self.columns.get_index_mut(i) {
                col.push(value.clone());
            }
        }
        self.rows += 1;
        Ok(())
    }

    /// Append a row of values in layout order.
    ///
    /// # Errors
    ///
    /// [`TableError::LengthMismatch`] if the value count differs from the
    /// column count.
    pub fn push_values(&mut self, values: Vec<Value>) -> Result<(), TableError> {
        if values.len() != self.columns.len() {
            return Err(TableError::LengthMismatch {
                expected: self.columns.len(),
                actual: values.len(),
            });
        }
        for (i, value) in values.into_iter().enumerate() {
            if let Some((_, col)) = self.columns.get_index_mut(i) {
                col.push(value);
            }
        }
        self.rows += 1;
        Ok(())
    }

    /// Project a subset of rows, in the order given.
    ///
    /// Out-of-range indices are skipped. This is the neighborhood
    /// projection primitive: the engine hands each window's callback a
    /// `take_rows` view of the dataset.
    pub fn take_rows(&self, indices: &[usize]) -> Table {
        let columns = self
            .columns
            .iter()
            .map(|(name, col)| {
                let picked = indices
                    .iter()
                    .filter_map(|&i| col.get(i).cloned())
                    .collect::<Vec<_>>();
                (name.clone(), picked)
            })
            .collect::<IndexMap<_, _>>();
        let rows = indices.iter().filter(|&&i| i < self.rows).count();
        Table { columns, rows }
    }

    /// The table's schema: ordered `(name, kind)` pairs.
    ///
    /// A column's kind is the kind of its first non-null value; columns
    /// holding only nulls report [`ValueKind::Null`], which unifies with
    /// anything.
    pub fn schema(&self) -> Schema {
        let fields = self
            .columns
            .iter()
            .map(|(name, col)| {
                let kind = col
                    .iter()
                    .find(|v| !v.is_null())
                    .map(Value::kind)
                    .unwrap_or(ValueKind::Null);
                (name.clone(), kind)
            })
            .collect();
        Schema { fields }
    }
}

/// An ordered list of `(column name, value kind)` pairs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schema {
    /// The `(name, kind)` pairs in column layout order.
    pub fields: Vec<(String, ValueKind)>,
}

impl Schema {
    /// `true` if both schemas have the same column names in the same
    /// order and pairwise-compatible kinds.
    pub fn compatible_with(&self, other: &Schema) -> bool {
        self.fields.len() == other.fields.len()
            && self
                .fields
                .iter()
                .zip(&other.fields)
                .all(|((an, ak), (bn, bk))| an == bn && ak.compatible_with(*bk))
    }

    /// Column names that conflict between the two schemas: names present
    /// in one but not the other (or at a different position), and names
    /// whose kinds are incompatible.
    pub fn conflicts(&self, other: &Schema) -> Vec<String> {
        let mut out = Vec::new();
        let longest = self.fields.len().max(other.fields.len());
        for i in 0..longest {
            match (self.fields.get(i), other.fields.get(i)) {
                (Some((an, ak)), Some((bn, bk))) => {
                    if an != bn {
                        out.push(an.clone());
                        out.push(bn.clone());
                    } else if !ak.compatible_with(*bk) {
                        out.push(an.clone());
                    }
                }
                (Some((an, _)), None) => out.push(an.clone()),
                (None, Some((bn, _))) => out.push(bn.clone()),
                (None, None) => {}
            }
        }
        out.dedup();
        out
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, kind)) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}: {kind}")?;
        }
        Ok(())
    }
}
