//! Window specification and neighborhood selection.

use crate::error::EngineError;
use gridfold_core::{Coord, Dataset};

/// The window around a reference point.
///
/// Exactly one form is active per run:
///
/// - `Radius`: a Euclidean ball — a row matches when its distance to the
///   reference point, over all gridded dimensions, is at most the
///   radius.
/// - `HalfWidths`: an axis-aligned hyper-rectangle — a row matches when
///   every per-dimension absolute difference is at most the
///   corresponding half-width.
///
/// Both predicates are boundary-inclusive: a row exactly on the window
/// boundary matches.
#[derive(Clone, Debug, PartialEq)]
pub enum WindowSpec {
    /// Euclidean distance threshold, uniform across all gridded
    /// dimensions. Must be finite and > 0.
    Radius(f64),
    /// Per-dimension half-widths, one per gridded dimension. All must be
    /// finite and > 0.
    HalfWidths(Vec<f64>),
}

impl WindowSpec {
    /// Validate the window against the gridded dimensionality.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidParameter`] for non-positive or non-finite
    /// values, or a half-width count that differs from `ndim`.
    pub fn validate(&self, ndim: usize) -> Result<(), EngineError> {
        match self {
            Self::Radius(r) => {
                if !r.is_finite() || *r <= 0.0 {
                    return Err(EngineError::InvalidParameter {
                        name: "radius",
                        reason: format!("must be finite and > 0, got {r}"),
                    });
                }
            }
            Self::HalfWidths(widths) => {
                if widths.len() != ndim {
                    return Err(EngineError::InvalidParameter {
                        name: "half_widths",
                        reason: format!("expected {ndim} half-widths, got {}", widths.len()),
                    });
                }
                if let Some(w) = widths.iter().find(|w| !w.is_finite() || **w <= 0.0) {
                    return Err(EngineError::InvalidParameter {
                        name: "half_widths",
                        reason: format!("must all be finite and > 0, got {w}"),
                    });
                }
            }
        }
        Ok(())
    }

    /// Boundary-inclusive window predicate. Coordinates must share the
    /// reference point's dimensionality.
    pub(crate) fn admits(&self, center: &Coord, coord: &Coord) -> bool {
        match self {
            Self::Radius(r) => {
                let dist_sq: f64 = center
                    .iter()
                    .zip(coord.iter())
                    .map(|(c, v)| (c - v) * (c - v))
                    .sum();
                dist_sq <= r * r
            }
            Self::HalfWidths(widths) => center
                .iter()
                .zip(coord.iter())
                .zip(widths.iter())
                .all(|((c, v), w)| (c - v).abs() <= *w),
        }
    }
}

/// Select the neighborhood of `point`: the ordered row indices of
/// `dataset` whose coordinates satisfy the window predicate.
///
/// Rows with missing or non-finite coordinates never match. An empty
/// result is not an error.
///
/// # Errors
///
/// [`EngineError::InvalidParameter`] if the window is invalid for the
/// dataset's dimensionality or the point's dimensionality differs.
pub fn select(
    dataset: &Dataset,
    point: &Coord,
    window: &WindowSpec,
) -> Result<Vec<usize>, EngineError> {
    window.validate(dataset.ndim())?;
    if point.len() != dataset.ndim() {
        return Err(EngineError::InvalidParameter {
            name: "point",
            reason: format!(
                "expected {} coordinates, got {}",
                dataset.ndim(),
                point.len()
            ),
        });
    }
    let coords = dataset.coords();
    Ok(select_indices(&coords, point, window))
}

/// Selection over precomputed row coordinates — the engine's inner
/// loop, free of validation and table lookups.
pub(crate) fn select_indices(
    coords: &[Option<Coord>],
    point: &Coord,
    window: &WindowSpec,
) -> Vec<usize> {
    coords
        .iter()
        .enumerate()
        .filter_map(|(i, c)| match c {
            Some(c) if window.admits(point, c) => Some(i),
            _ => None,
        })
        .collect()
}
