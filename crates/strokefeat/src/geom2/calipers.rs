//! Minimum-area oriented bounding box (rotating calipers over hull edges).
//!
//! For every hull edge the full point set is rotated by minus the edge angle and
//! measured with an axis-aligned box. The smallest area wins; ties keep the
//! first edge in hull order (lower chain, then upper chain). Width and height
//! always come from that one winning orientation.
//!
//! Code cross-refs: `hull::convex_hull`, `util::Extent2`

use super::hull::convex_hull;
use super::types::Point;
use super::util::Extent2;

/// Result of the minimum-area box search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinBox {
    /// Extent along the winning hull edge direction.
    pub width: f64,
    /// Extent perpendicular to it.
    pub height: f64,
    /// Angle `atan2(dy, dx)` of the winning hull edge.
    pub angle: f64,
    /// Index of the winning edge `(hull[edge], hull[edge + 1])`.
    pub edge: usize,
}

impl MinBox {
    #[inline]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Minimum-area enclosing rectangle of `points`; `None` when there are no points.
pub fn min_area_box(points: &[Point]) -> Option<MinBox> {
    let hull = convex_hull(points);
    if hull.is_empty() {
        return None;
    }
    let n = hull.len();
    let mut best: Option<(MinBox, f64)> = None;
    for i in 0..n {
        let p1 = hull[i];
        let p2 = hull[(i + 1) % n];
        let angle = (p2.y - p1.y).atan2(p2.x - p1.x);
        let ext = rotated_extent(points, -angle)?;
        let area = ext.area();
        if best.as_ref().is_none_or(|(_, a)| area < *a) {
            best = Some((
                MinBox {
                    width: ext.width(),
                    height: ext.height(),
                    angle,
                    edge: i,
                },
                area,
            ));
        }
    }
    best.map(|(b, _)| b)
}

/// Axis-aligned extent of `points` after rotating them by `theta` about the origin.
///
/// Uses `x' = x cos θ - y sin θ`, `y' = x sin θ + y cos θ` with this exact
/// operation order so results are reproducible.
pub fn rotated_extent(points: &[Point], theta: f64) -> Option<Extent2> {
    let (sin, cos) = theta.sin_cos();
    let mut it = points.iter().map(|p| rotate(*p, cos, sin));
    let (x0, y0) = it.next()?;
    let mut ext = Extent2 {
        min_x: x0,
        max_x: x0,
        min_y: y0,
        max_y: y0,
    };
    for (x, y) in it {
        ext.include(x, y);
    }
    Some(ext)
}

#[inline]
fn rotate(p: Point, cos: f64, sin: f64) -> (f64, f64) {
    (p.x * cos - p.y * sin, p.x * sin + p.y * cos)
}
