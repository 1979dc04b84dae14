//! Bowyer–Watson Delaunay triangulation of a 2-D point set.
//!
//! Incremental insertion against a super-triangle enclosing the input.
//! Plain f64 predicates are sufficient here: the triangulation feeds an
//! alpha filter and a tolerant point-in-triangle test, not an exact
//! topology consumer.

use std::collections::HashMap;

/// Triangulate `points`, returning index triples into `points`.
///
/// Points must be finite and distinct (the caller deduplicates).
/// Returns an empty vector when the input is collinear or has fewer
/// than three points.
pub(crate) fn triangulate(points: &[[f64; 2]]) -> Vec<[usize; 3]> {
    let n = points.len();
    if n < 3 {
        return Vec::new();
    }

    // Super-triangle generously enclosing the bounding box and every
    // circumcircle the input can produce.
    let (min_x, max_x) = min_max(points.iter().map(|p| p[0]));
    let (min_y, max_y) = min_max(points.iter().map(|p| p[1]));
    let cx = (min_x + max_x) / 2.0;
    let cy = (min_y + max_y) / 2.0;
    let d = (max_x - min_x).max(max_y - min_y).max(1.0) * 1024.0;

    let mut verts: Vec<[f64; 2]> = points.to_vec();
    verts.push([cx - 2.0 * d, cy - d]);
    verts.push([cx + 2.0 * d, cy - d]);
    verts.push([cx, cy + 2.0 * d]);
    let (s0, s1, s2) = (n, n + 1, n + 2);

    let mut triangles: Vec<[usize; 3]> = vec![[s0, s1, s2]];

    for i in 0..n {
        let p = verts[i];

        // Triangles whose circumcircle contains the new point.
        let mut bad = Vec::new();
        let mut kept = Vec::new();
        for tri in triangles.drain(..) {
            if circumcircle_contains(verts[tri[0]], verts[tri[1]], verts[tri[2]], p) {
                bad.push(tri);
            } else {
                kept.push(tri);
            }
        }

        // The cavity boundary: edges belonging to exactly one bad triangle.
        let mut edge_count: HashMap<(usize, usize), usize> = HashMap::new();
        for tri in &bad {
            for edge in tri_edges(tri) {
                *edge_count.entry(edge).or_insert(0) += 1;
            }
        }
        let mut boundary: Vec<(usize, usize)> = edge_count
            .into_iter()
            .filter_map(|(edge, count)| (count == 1).then_some(edge))
            .collect();
        boundary.sort_unstable();

        // Retriangulate the cavity around the new point.
        triangles = kept;
        for (a, b) in boundary {
            triangles.push([a, b, i]);
        }
    }

    // Drop triangles touching the super-triangle.
    triangles.retain(|tri| tri.iter().all(|&v| v < n));
    triangles.sort_unstable();
    triangles
}

/// Circumradius of the triangle `(a, b, c)`.
///
/// Degenerate (collinear) triangles report infinity, so the alpha
/// filter always rejects them.
pub(crate) fn circumradius(a: [f64; 2], b: [f64; 2], c: [f64; 2]) -> f64 {
    let la = dist(b, c);
    let lb = dist(a, c);
    let lc = dist(a, b);
    let area2 = cross(a, b, c).abs();
    if area2 <= f64::MIN_POSITIVE {
        return f64::INFINITY;
    }
    la * lb * lc / (2.0 * area2)
}

/// Cross product of `(b - a) x (c - a)`: positive when `c` lies to the
/// left of the directed line `a -> b`.
pub(crate) fn cross(a: [f64; 2], b: [f64; 2], c: [f64; 2]) -> f64 {
    (b[0] - a[0]) * (c[1] - a[1]) - (b[1] - a[1]) * (c[0] - a[0])
}

fn dist(a: [f64; 2], b: [f64; 2]) -> f64 {
    ((a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2)).sqrt()
}

fn min_max(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

/// The three undirected edges of a triangle, as ordered index pairs.
fn tri_edges(tri: &[usize; 3]) -> [(usize, usize); 3] {
    let e = |a: usize, b: usize| (a.min(b), a.max(b));
    [
        e(tri[0], tri[1]),
        e(tri[1], tri[2]),
        e(tri[2], tri[0]),
    ]
}

/// In-circumcircle predicate, normalized for triangle orientation.
fn circumcircle_contains(a: [f64; 2], b: [f64; 2], c: [f64; 2], p: [f64; 2]) -> bool {
    let orient = cross(a, b, c);
    if orient.abs() <= f64::MIN_POSITIVE {
        // Collinear "triangle" has no circumcircle.
        return false;
    }
    let ax = a[0] - p[0];
    let ay = a[1] - p[1];
    let bx = b[0] - p[0];
    let by = b[1] - p[1];
    let cx = c[0] - p[0];
    let cy = c[1] - p[1];
    let det = (ax * ax + ay * ay) * (bx * cy - cx * by)
        - (bx * bx + by * by) * (ax * cy - cx * ay)
        + (cx * cx + cy * cy) * (ax * by - bx * ay);
    if orient > 0.0 {
        det > 0.0
    } else {
        det < 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_yields_two_triangles() {
        let pts = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
        let tris = triangulate(&pts);
        assert_eq!(tris.len(), 2);
        // Together the two triangles use all four vertices.
        let mut used: Vec<usize> = tris.iter().flatten().copied().collect();
        used.sort_unstable();
        used.dedup();
        assert_eq!(used, vec![0, 1, 2, 3]);
    }

    #[test]
    fn collinear_points_yield_no_triangles() {
        let pts = [[0.0, 0.0], [1.0, 1.0], [2.0, 2.0], [3.0, 3.0]];
        assert!(triangulate(&pts).is_empty());
    }

    #[test]
    fn fewer_than_three_points_yield_no_triangles() {
        assert!(triangulate(&[[0.0, 0.0], [1.0, 0.0]]).is_empty());
    }

    #[test]
    fn equilateral_circumradius() {
        // Equilateral with side 1: circumradius = 1/sqrt(3).
        let r = circumradius([0.0, 0.0], [1.0, 0.0], [0.5, 3f64.sqrt() / 2.0]);
        assert!((r - 1.0 / 3f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn degenerate_circumradius_is_infinite() {
        let r = circumradius([0.0, 0.0], [1.0, 1.0], [2.0, 2.0]);
        assert!(r.is_infinite());
    }

    #[test]
    fn interior_point_appears_in_triangulation() {
        let pts = [
            [0.0, 0.0],
            [4.0, 0.0],
            [4.0, 4.0],
            [0.0, 4.0],
            [2.0, 2.0],
        ];
        let tris = triangulate(&pts);
        // A convex quad with one interior point triangulates into 4 triangles.
        assert_eq!(tris.len(), 4);
        assert!(tris.iter().any(|t| t.contains(&4)));
    }

    #[test]
    fn delaunay_property_no_point_inside_any_circumcircle() {
        let pts = [
            [0.0, 0.0],
            [3.0, 0.5],
            [5.0, 2.0],
            [1.5, 4.0],
            [4.0, 5.0],
            [0.5, 2.5],
            [2.5, 2.0],
        ];
        let tris = triangulate(&pts);
        assert!(!tris.is_empty());
        for tri in &tris {
            for (i, p) in pts.iter().enumerate() {
                if tri.contains(&i) {
                    continue;
                }
                assert!(
                    !circumcircle_contains(pts[tri[0]], pts[tri[1]], pts[tri[2]], *p),
                    "point {i} inside circumcircle of {tri:?}"
                );
            }
        }
    }
}
