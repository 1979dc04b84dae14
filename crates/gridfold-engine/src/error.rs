//! Error types for the windowed apply-combine engine.

use gridfold_core::{Coord, Schema};
use std::error::Error;
use std::fmt;

/// Boxed error type returned by window callbacks.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Errors from the windowed apply-combine engine.
#[derive(Debug)]
pub enum EngineError {
    /// A configuration value is invalid (non-positive radius, wrong
    /// half-width arity, zero workers, ...).
    InvalidParameter {
        /// The offending parameter.
        name: &'static str,
        /// Why it was rejected.
        reason: String,
    },
    /// The grid's dimensions disagree with the dataset's.
    DimensionMismatch {
        /// The grid's dimension names.
        grid: Vec<String>,
        /// The dataset's dimension names.
        dataset: Vec<String>,
    },
    /// The window callback failed. Wraps the original cause, annotated
    /// with the grid point whose window was being evaluated.
    Callback {
        /// The grid point whose callback failed.
        point: Coord,
        /// The original callback error.
        source: BoxError,
    },
    /// A window result's columns disagree with the first non-empty
    /// result seen in this run.
    SchemaMismatch {
        /// The grid point that established the reference schema.
        first_point: Coord,
        /// The grid point with the conflicting result.
        point: Coord,
        /// The reference schema.
        expected: Schema,
        /// The conflicting schema.
        actual: Schema,
    },
    /// A callback output column shares its name with a gridded
    /// coordinate dimension.
    ColumnCollision {
        /// The colliding column name.
        name: String,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter { name, reason } => {
                write!(f, "invalid parameter '{name}': {reason}")
            }
            Self::DimensionMismatch { grid, dataset } => write!(
                f,
                "grid dimensions {grid:?} do not match dataset dimensions {dataset:?}"
            ),
            Self::Callback { point, source } => {
                write!(f, "callback failed at grid point {point:?}: {source}")
            }
            Self::SchemaMismatch {
                first_point,
                point,
                expected,
                actual,
            } => write!(
                f,
                "window result schema at grid point {point:?} ({actual}) does not match \
                 the schema established at {first_point:?} ({expected}); \
                 conflicting columns: {:?}",
                expected.conflicts(actual)
            ),
            Self::ColumnCollision { name } => write!(
                f,
                "callback output column '{name}' collides with a coordinate dimension"
            ),
        }
    }
}

impl Error for EngineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Callback { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}
