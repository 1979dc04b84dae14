//! Error types for grid generation.

use gridfold_hull::HullError;
use std::fmt;

/// Errors arising from grid specification or construction.
#[derive(Clone, Debug, PartialEq)]
pub enum GridError {
    /// A configuration value is invalid.
    InvalidParameter {
        /// The offending parameter.
        name: &'static str,
        /// Why it was rejected.
        reason: String,
    },
    /// A named coordinate dimension does not exist in the dataset.
    UnknownDimension {
        /// The missing dimension name.
        name: String,
    },
    /// The strategy only supports a fixed dimensionality.
    UnsupportedDimension {
        /// The strategy that was requested.
        strategy: &'static str,
        /// The dimensionality it supports.
        expected: usize,
        /// The dimensionality that was requested.
        actual: usize,
    },
    /// The dataset has no row with finite coordinates in every gridded
    /// dimension, so no coordinate domain can be observed.
    EmptyDomain,
    /// An axis (or the 2-D bounding box) has zero extent, so no lattice
    /// spacing can be derived.
    DegenerateExtent {
        /// The collapsed dimension.
        dimension: String,
    },
    /// Alpha-shape construction failed.
    Hull(HullError),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter { name, reason } => {
                write!(f, "invalid parameter '{name}': {reason}")
            }
            Self::UnknownDimension { name } => {
                write!(f, "dimension '{name}' does not exist in the dataset")
            }
            Self::UnsupportedDimension {
                strategy,
                expected,
                actual,
            } => write!(
                f,
                "strategy '{strategy}' requires {expected} dimensions, got {actual}"
            ),
            Self::EmptyDomain => {
                write!(f, "dataset has no row with finite coordinates")
            }
            Self::DegenerateExtent { dimension } => {
                write!(f, "dimension '{dimension}' has zero extent")
            }
            Self::Hull(e) => write!(f, "boundary shape: {e}"),
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Hull(e) => Some(e),
            _ => None,
        }
    }
}

impl From<HullError> for GridError {
    fn from(e: HullError) -> Self {
        Self::Hull(e)
    }
}
