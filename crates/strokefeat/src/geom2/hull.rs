//! Convex hull (Andrew's monotone chain).
//!
//! Output contract
//! - Counterclockwise order, starting at the lexicographically smallest point.
//! - Strictly convex: collinear boundary points are dropped (pop rule `<= 0`).
//! - No wrap-around duplicate (first != last).
//! - Exact duplicate inputs collapse to one vertex.
//!
//! Degenerate inputs: 0 or 1 distinct points come back unchanged; a collinear
//! set comes back as its two extreme points.

use super::types::Point;
use super::util::{cmp_xy, orientation};

/// Convex hull of `points` in CCW order.
pub fn convex_hull(points: &[Point]) -> Vec<Point> {
    let mut pts: Vec<Point> = points.to_vec();
    pts.sort_by(cmp_xy);
    pts.dedup();
    if pts.len() < 2 {
        return pts;
    }

    let mut lower: Vec<Point> = Vec::with_capacity(pts.len());
    for &p in &pts {
        push_convex(&mut lower, p);
    }
    let mut upper: Vec<Point> = Vec::with_capacity(pts.len());
    for &p in pts.iter().rev() {
        push_convex(&mut upper, p);
    }

    // Each chain ends where the other starts.
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    hull
}

#[inline]
fn push_convex(chain: &mut Vec<Point>, p: Point) {
    while chain.len() >= 2 && orientation(chain[chain.len() - 2], chain[chain.len() - 1], p) <= 0.0
    {
        chain.pop();
    }
    chain.push(p);
}

/// True if `p` lies inside or on the CCW polygon `hull` (tolerance `eps` on the
/// orientation test). Hulls with < 3 vertices contain only points on their
/// segment/point.
pub fn hull_contains(hull: &[Point], p: Point, eps: f64) -> bool {
    match hull.len() {
        0 => false,
        1 => (hull[0] - p).norm() <= eps,
        2 => {
            let (a, b) = (hull[0], hull[1]);
            let len = (b - a).norm();
            if orientation(a, b, p).abs() > eps * len.max(1.0) {
                return false;
            }
            let t = (p - a).dot(&(b - a));
            t >= -eps && t <= (b - a).norm_squared() + eps
        }
        n => (0..n).all(|i| orientation(hull[i], hull[(i + 1) % n], p) >= -eps),
    }
}
