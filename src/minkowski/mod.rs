//! Minkowski sum of two convex polygons.

use std::cmp::Ordering;

use crate::point::Point;

fn bottom_index(poly: &[Point]) -> usize {
    let mut best = 0;
    for i in 1..poly.len() {
        if poly[i].cmp_lexicographical(&poly[best]) == Ordering::Less {
            best = i;
        }
    }
    best
}

fn edges_from_bottom(poly: &[Point]) -> Vec<Point> {
    let n = poly.len();
    let start = bottom_index(poly);
    (0..n).map(|i| {
        let a = &poly[(start + i) % n];
        let b = &poly[(start + i + 1) % n];
        b.sub(a)
    }).collect()
}

/// Computes the Minkowski sum of two convex polygons, each given in
/// counter-clockwise order. The result is returned in counter-clockwise
/// order, starting from the sum of the two inputs' lexicographically
/// smallest vertices.
///
/// Both polygons' edge vectors, read starting from their lowest vertex,
/// already increase in polar angle monotonically around the full turn (a
/// property convexity guarantees); the sum's edge sequence is therefore
/// just those two sequences merged by angle, and the sum's vertices are its
/// running prefix sum.
///
/// An empty polygon on either side makes the sum empty (the Minkowski sum
/// with the empty set is empty); a single-point polygon degrades to
/// translating the other polygon by that point.
pub fn minkowski_sum(a: &[Point], b: &[Point]) -> Vec<Point> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    if a.len() == 1 {
        return b.iter().map(|p| p.add(&a[0])).collect();
    }
    if b.len() == 1 {
        return a.iter().map(|p| p.add(&b[0])).collect();
    }

    let start = a[bottom_index(a)].add(&b[bottom_index(b)]);
    let edges_a = edges_from_bottom(a);
    let edges_b = edges_from_bottom(b);

    // Seeded pointing straight down, matching `geom_2d.hpp`'s
    // `Point<k> last_dir(0, -1)`, before the first edge is chosen.
    let mut last_dir = Point::new(0, -1, 2);

    let mut merged = Vec::with_capacity(edges_a.len() + edges_b.len());
    let (mut i, mut j) = (0, 0);
    while i < edges_a.len() && j < edges_b.len() {
        let diff_a = edges_a[i].angle_diff(&last_dir);
        let diff_b = edges_b[j].angle_diff(&last_dir);
        match diff_a.cmp_angular_360(&diff_b) {
            Ordering::Less | Ordering::Equal => {
                last_dir = edges_a[i].clone();
                merged.push(edges_a[i].clone());
                i += 1;
            }
            Ordering::Greater => {
                last_dir = edges_b[j].clone();
                merged.push(edges_b[j].clone());
                j += 1;
            }
        }
    }
    merged.extend_from_slice(&edges_a[i..]);
    merged.extend_from_slice(&edges_b[j..]);

    let mut result = Vec::with_capacity(merged.len() + 1);
    let mut current = start;
    result.push(current.clone());
    for edge in &merged[..merged.len() - 1] {
        current = current.add(edge);
        result.push(current.clone());
    }
    result
}
