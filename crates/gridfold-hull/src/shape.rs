//! The [`AlphaShape`] boundary type.

use crate::delaunay::{circumradius, cross, triangulate};
use crate::error::HullError;
use std::collections::HashMap;

/// An alpha shape of a 2-D point set.
///
/// Built once from a point cloud and an `alpha` parameter, then queried
/// with [`contains`](Self::contains). The shape is the union of all
/// Delaunay triangles whose circumradius is at most `alpha`; membership
/// uses the closed-boundary convention (points exactly on the boundary
/// are contained).
///
/// # Examples
///
/// ```
/// use gridfold_hull::AlphaShape;
///
/// let square = [[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0]];
/// let shape = AlphaShape::build(&square, 10.0).unwrap();
///
/// assert!(shape.contains([2.0, 2.0]));
/// assert!(shape.contains([0.0, 0.0])); // boundary vertex: contained
/// assert!(!shape.contains([5.0, 5.0]));
/// ```
#[derive(Clone, Debug)]
pub struct AlphaShape {
    points: Vec<[f64; 2]>,
    triangles: Vec<[usize; 3]>,
    alpha: f64,
}

impl AlphaShape {
    /// Build an alpha shape from `points` with the given `alpha`.
    ///
    /// Non-finite points are discarded and duplicates collapse to one
    /// point before triangulation.
    ///
    /// # Errors
    ///
    /// - [`HullError::InvalidAlpha`] if `alpha` is not finite and > 0.
    /// - [`HullError::DegenerateInput`] if fewer than three distinct
    ///   finite points remain, if the points are collinear, or if no
    ///   triangle survives the alpha filter.
    pub fn build(points: &[[f64; 2]], alpha: f64) -> Result<Self, HullError> {
        if !alpha.is_finite() || alpha <= 0.0 {
            return Err(HullError::InvalidAlpha { value: alpha });
        }

        let mut distinct: Vec<[f64; 2]> = points
            .iter()
            .copied()
            .filter(|p| p[0].is_finite() && p[1].is_finite())
            .collect();
        distinct.sort_by(|a, b| a[0].total_cmp(&b[0]).then(a[1].total_cmp(&b[1])));
        distinct.dedup();

        if distinct.len() < 3 {
            return Err(HullError::DegenerateInput {
                reason: format!(
                    "need at least 3 distinct finite points, got {}",
                    distinct.len()
                ),
            });
        }

        let all = triangulate(&distinct);
        if all.is_empty() {
            return Err(HullError::DegenerateInput {
                reason: "points are collinear".to_string(),
            });
        }

        let triangles: Vec<[usize; 3]> = all
            .into_iter()
            .filter(|tri| {
                circumradius(distinct[tri[0]], distinct[tri[1]], distinct[tri[2]]) <= alpha
            })
            .collect();
        if triangles.is_empty() {
            return Err(HullError::DegenerateInput {
                reason: format!("no triangle has circumradius <= alpha ({alpha})"),
            });
        }

        Ok(Self {
            points: distinct,
            triangles,
            alpha,
        })
    }

    /// The alpha parameter the shape was built with.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Number of retained triangles.
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Test whether `p` lies inside the shape (closed boundary: points
    /// exactly on an edge or vertex are contained).
    ///
    /// Non-finite query points are never contained.
    pub fn contains(&self, p: [f64; 2]) -> bool {
        if !p[0].is_finite() || !p[1].is_finite() {
            return false;
        }
        self.triangles.iter().any(|tri| {
            point_in_triangle(
                self.points[tri[0]],
                self.points[tri[1]],
                self.points[tri[2]],
                p,
            )
        })
    }

    /// The shape's boundary edges: edges incident to exactly one
    /// retained triangle, as coordinate pairs.
    ///
    /// For a hole-free shape this traces the outline; shapes with holes
    /// (small alpha on an annular cloud) also report the inner rims.
    pub fn boundary_edges(&self) -> Vec<([f64; 2], [f64; 2])> {
        let mut edge_count: HashMap<(usize, usize), usize> = HashMap::new();
        for tri in &self.triangles {
            for (a, b) in [
                (tri[0], tri[1]),
                (tri[1], tri[2]),
                (tri[2], tri[0]),
            ] {
                *edge_count.entry((a.min(b), a.max(b))).or_insert(0) += 1;
            }
        }
        let mut edges: Vec<(usize, usize)> = edge_count
            .into_iter()
            .filter_map(|(edge, count)| (count == 1).then_some(edge))
            .collect();
        edges.sort_unstable();
        edges
            .into_iter()
            .map(|(a, b)| (self.points[a], self.points[b]))
            .collect()
    }
}

/// Closed-boundary point-in-triangle test with a small tolerance for
/// points sitting exactly on an edge.
fn point_in_triangle(a: [f64; 2], b: [f64; 2], c: [f64; 2], p: [f64; 2]) -> bool {
    // Normalize to counter-clockwise so all three cross products share
    // a sign convention.
    let (b, c) = if cross(a, b, c) < 0.0 { (c, b) } else { (b, c) };
    let span = (a[0].abs())
        .max(a[1].abs())
        .max(b[0].abs())
        .max(b[1].abs())
        .max(c[0].abs())
        .max(c[1].abs())
        .max(1.0);
    let eps = span * span * 1e-12;
    cross(a, b, p) >= -eps && cross(b, c, p) >= -eps && cross(c, a, p) >= -eps
}
