use std::cmp::Ordering;

use super::types::{Point, Sketch};

/// Signed area of the parallelogram spanned by `a - o` and `b - o`.
///
/// Positive: counterclockwise turn at `a`; zero: collinear; negative: clockwise.
#[inline]
pub fn orientation(o: Point, a: Point, b: Point) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

/// Concatenate all points of a sketch (path order, then in-path order).
pub fn flatten(sketch: &Sketch) -> Vec<Point> {
    let n = sketch.paths.iter().map(|p| p.points.len()).sum();
    let mut out = Vec::with_capacity(n);
    for path in &sketch.paths {
        out.extend_from_slice(&path.points);
    }
    out
}

/// Lexicographic order: x ascending, then y ascending.
///
/// IEEE comparison, so `-0.0` ties with `0.0`; NaN compares equal (callers
/// reject non-finite input at construction).
#[inline]
pub(crate) fn cmp_xy(a: &Point, b: &Point) -> Ordering {
    match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    }
}

/// Hashable identity of a point by exact coordinates (`-0.0` folds into `0.0`).
#[inline]
pub(crate) fn point_key(p: Point) -> (u64, u64) {
    ((p.x + 0.0).to_bits(), (p.y + 0.0).to_bits())
}

/// Axis-aligned extent of a point set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent2 {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Extent2 {
    /// Extent of `points`; `None` when empty.
    pub fn of<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point>,
    {
        let mut it = points.into_iter();
        let first = it.next()?;
        let mut e = Extent2 {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };
        for p in it {
            e.include(p.x, p.y);
        }
        Some(e)
    }

    #[inline]
    pub(crate) fn include(&mut self, x: f64, y: f64) {
        if x < self.min_x {
            self.min_x = x;
        }
        if x > self.max_x {
            self.max_x = x;
        }
        if y < self.min_y {
            self.min_y = y;
        }
        if y > self.max_y {
            self.max_y = y;
        }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Midpoint of the x-range.
    #[inline]
    pub fn center_x(&self) -> f64 {
        (self.min_x + self.max_x) / 2.0
    }
}
