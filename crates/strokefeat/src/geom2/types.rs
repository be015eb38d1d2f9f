//! Sketch data model: points, paths (strokes), sketches.
//!
//! - `Point`: plain `Vector2<f64>`; identity is its exact coordinates.
//! - `Path`: one pen stroke, ordered; may hold zero or one point.
//! - `Sketch`: ordered strokes of one drawn symbol. Immutable once built.
//!
//! Code cross-refs: `util::flatten`, `hull::convex_hull`, `crate::features`

use std::fmt;

use nalgebra::Vector2;

/// A 2D point. Coordinates are caller-normalized (convention: `[0,1]²`).
pub type Point = Vector2<f64>;

/// One continuous pen stroke. Point order defines segment direction.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    pub points: Vec<Point>,
}

impl Path {
    #[inline]
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Build from `(x, y)` pairs.
    pub fn from_xy(xy: &[(f64, f64)]) -> Self {
        Self {
            points: xy.iter().map(|&(x, y)| Vector2::new(x, y)).collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consecutive point pairs `(p[i-1], p[i])`. Empty for paths with < 2 points.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }
}

/// An ordered set of strokes forming one symbol.
///
/// Path order carries no meaning for any feature but is preserved, so flattened
/// point order (and thus floating-point results) is reproducible.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Sketch {
    pub paths: Vec<Path>,
}

impl Sketch {
    #[inline]
    pub fn new(paths: Vec<Path>) -> Self {
        Self { paths }
    }

    /// Checked constructor for loosely typed input (e.g. JSON arrays).
    ///
    /// Every point must have exactly two finite coordinates; anything else is a
    /// caller bug and is reported with its path/point index.
    pub fn try_from_nested(raw: Vec<Vec<Vec<f64>>>) -> Result<Self, SketchError> {
        let mut paths = Vec::with_capacity(raw.len());
        for (path_idx, raw_path) in raw.into_iter().enumerate() {
            let mut points = Vec::with_capacity(raw_path.len());
            for (point_idx, coords) in raw_path.into_iter().enumerate() {
                let (x, y) = match coords.as_slice() {
                    [x, y] => (*x, *y),
                    _ => {
                        return Err(SketchError::MalformedPoint {
                            path: path_idx,
                            point: point_idx,
                            coords: coords.len(),
                        })
                    }
                };
                if !x.is_finite() || !y.is_finite() {
                    return Err(SketchError::NonFinite {
                        path: path_idx,
                        point: point_idx,
                    });
                }
                points.push(Vector2::new(x, y));
            }
            paths.push(Path { points });
        }
        Ok(Self { paths })
    }

    /// Build from nested `(x, y)` pairs; handy in tests and demos.
    pub fn from_xy(paths: &[&[(f64, f64)]]) -> Self {
        Self {
            paths: paths.iter().map(|p| Path::from_xy(p)).collect(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// All points, path order then in-path order.
    pub fn points(&self) -> impl Iterator<Item = &Point> + '_ {
        self.paths.iter().flat_map(|p| p.points.iter())
    }
}

/// Contract violations detected while building a `Sketch` from raw input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SketchError {
    /// A point did not have exactly two coordinates.
    MalformedPoint {
        path: usize,
        point: usize,
        coords: usize,
    },
    /// A coordinate was NaN or infinite.
    NonFinite { path: usize, point: usize },
}

impl fmt::Display for SketchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SketchError::MalformedPoint {
                path,
                point,
                coords,
            } => write!(
                f,
                "path {path}, point {point}: expected 2 coordinates, got {coords}"
            ),
            SketchError::NonFinite { path, point } => {
                write!(f, "path {path}, point {point}: coordinate is not finite")
            }
        }
    }
}

impl std::error::Error for SketchError {}
