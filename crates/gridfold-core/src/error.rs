//! Error types for table construction and access.

use std::fmt;

/// Errors arising from table construction or row operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableError {
    /// A pushed row named a column that does not match the table's layout.
    ColumnMismatch {
        /// The column name the table expected at this position.
        expected: String,
        /// The column name the row supplied.
        actual: String,
    },
    /// A referenced column does not exist.
    UnknownColumn {
        /// The missing column name.
        name: String,
    },
    /// A pushed row had the wrong number of values.
    LengthMismatch {
        /// Number of columns in the table.
        expected: usize,
        /// Number of values supplied.
        actual: usize,
    },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColumnMismatch { expected, actual } => {
                write!(f, "column mismatch: expected '{expected}', got '{actual}'")
            }
            Self::UnknownColumn { name } => write!(f, "unknown column '{name}'"),
            Self::LengthMismatch { expected, actual } => {
                write!(f, "row has {actual} values, table has {expected} columns")
            }
        }
    }
}

impl std::error::Error for TableError {}
