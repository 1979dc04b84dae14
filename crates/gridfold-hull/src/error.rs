//! Error types for alpha-shape construction.

use std::fmt;

/// Errors arising from alpha-shape construction.
///
/// Membership testing never fails; all failure modes are caught at
/// [`AlphaShape::build`](crate::AlphaShape::build) time.
#[derive(Clone, Debug, PartialEq)]
pub enum HullError {
    /// `alpha` must be finite and strictly positive.
    InvalidAlpha {
        /// The offending value.
        value: f64,
    },
    /// The point set cannot support a 2-D boundary: fewer than three
    /// distinct finite points, all points collinear, or no triangle
    /// survived the alpha filter.
    DegenerateInput {
        /// What made the input degenerate.
        reason: String,
    },
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAlpha { value } => {
                write!(f, "alpha must be finite and > 0, got {value}")
            }
            Self::DegenerateInput { reason } => {
                write!(f, "degenerate input for alpha shape: {reason}")
            }
        }
    }
}

impl std::error::Error for HullError {}
