//! Convex hull via Andrew's monotone chain.

use crate::point::{ccw, Orientation, Point};

/// Returns the vertices of the convex hull of `points`, in counter-clockwise
/// order starting from the lexicographically smallest point. Collinear
/// points on a hull edge are dropped; the hull of fewer than 3 distinct
/// points is returned unchanged (a point or a segment has no interior to
/// bound).
pub fn convex_hull(points: &[Point]) -> Vec<Point> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let mut sorted: Vec<&Point> = points.iter().collect();
    sorted.sort_by(|a, b| a.cmp_lexicographical(b));
    sorted.dedup_by(|a, b| a.cmp_lexicographical(b) == std::cmp::Ordering::Equal);

    if sorted.len() < 3 {
        return sorted.into_iter().cloned().collect();
    }

    let build_half = |pts: &[&Point]| -> Vec<Point> {
        let mut chain: Vec<Point> = Vec::with_capacity(pts.len());
        for &p in pts {
            while chain.len() >= 2 {
                let turn = ccw(&chain[chain.len() - 2], &chain[chain.len() - 1], p);
                if turn == Orientation::CounterClockwise {
                    break;
                }
                chain.pop();
            }
            chain.push(p.clone());
        }
        chain
    };

    let lower = build_half(&sorted);
    let upper = build_half(&sorted.iter().rev().copied().collect::<Vec<_>>());

    let mut hull = lower;
    hull.pop();
    let mut upper = upper;
    upper.pop();
    hull.extend(upper);
    hull
}
