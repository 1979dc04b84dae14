//! Observed coordinate extents.

use crate::error::GridError;
use gridfold_core::{Coord, Dataset};

/// The observed `[min, max]` of one coordinate dimension.
///
/// Computed over rows with finite coordinates in *every* gridded
/// dimension, so all axes describe the same row population.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisExtent {
    /// Smallest observed coordinate.
    pub min: f64,
    /// Largest observed coordinate.
    pub max: f64,
}

impl AxisExtent {
    /// `max - min`. Zero for a collapsed axis.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// Collect the usable coordinates of `dataset` restricted to `dims`,
/// skipping rows with any missing or non-finite coordinate.
///
/// # Errors
///
/// [`GridError::UnknownDimension`] if a dimension is absent from the
/// dataset's table.
pub fn finite_coords(dataset: &Dataset, dims: &[String]) -> Result<Vec<Coord>, GridError> {
    for dim in dims {
        if dataset.table().column(dim).is_none() {
            return Err(GridError::UnknownDimension { name: dim.clone() });
        }
    }
    let mut out = Vec::new();
    for row in 0..dataset.table().num_rows() {
        let mut coord = Coord::with_capacity(dims.len());
        let mut ok = true;
        for dim in dims {
            match dataset.table().value(row, dim).and_then(|v| v.as_f64()) {
                Some(v) if v.is_finite() => coord.push(v),
                _ => {
                    ok = false;
                    break;
                }
            }
        }
        if ok {
            out.push(coord);
        }
    }
    Ok(out)
}

/// Observed per-axis extents of the usable coordinates.
///
/// # Errors
///
/// [`GridError::EmptyDomain`] when no usable row exists.
pub fn observed_extents(coords: &[Coord], ndim: usize) -> Result<Vec<AxisExtent>, GridError> {
    if coords.is_empty() {
        return Err(GridError::EmptyDomain);
    }
    let mut extents = vec![
        AxisExtent {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        };
        ndim
    ];
    for coord in coords {
        for (axis, &v) in coord.iter().enumerate() {
            extents[axis].min = extents[axis].min.min(v);
            extents[axis].max = extents[axis].max.max(v);
        }
    }
    Ok(extents)
}
