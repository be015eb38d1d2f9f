//! Scalar shape descriptors over a `Sketch`.
//!
//! Each function is pure and independent. Degenerate input never fails: counts,
//! ratios and scores fall back to `0.0`; the min-box features return `None`.

use std::collections::HashSet;

use tracing::warn;

use crate::geom2::{flatten, min_area_box, point_key, Extent2, MinBox, Point, Sketch};

/// Number of strokes.
pub fn path_count(sketch: &Sketch) -> f64 {
    sketch.paths.len() as f64
}

/// Total number of points across all strokes.
pub fn point_count(sketch: &Sketch) -> f64 {
    sketch.paths.iter().map(|p| p.points.len()).sum::<usize>() as f64
}

/// Axis-aligned width / height. `0.0` for flat or empty sketches.
pub fn aspect_ratio(sketch: &Sketch) -> f64 {
    match Extent2::of(sketch.points()) {
        Some(e) if e.height() != 0.0 => e.width() / e.height(),
        _ => 0.0,
    }
}

/// Fraction of distinct points whose mirror about the vertical line through the
/// x-extent midpoint is also a point of the sketch (exact coordinate match).
///
/// A near-symmetric drawing scores low. See `symmetry_grid` for the bucketed
/// variant.
pub fn symmetry(sketch: &Sketch) -> f64 {
    let Some(ext) = Extent2::of(sketch.points()) else {
        return 0.0;
    };
    let center_x = ext.center_x();
    let mut distinct: Vec<Point> = Vec::new();
    let mut seen: HashSet<(u64, u64)> = HashSet::new();
    for p in sketch.points() {
        if seen.insert(point_key(*p)) {
            distinct.push(*p);
        }
    }
    let matches = distinct
        .iter()
        .filter(|p| seen.contains(&point_key(Point::new(center_x * 2.0 - p.x, p.y))))
        .count();
    matches as f64 / distinct.len() as f64
}

/// Bucketed symmetry: like `symmetry`, but points and mirrors are snapped to a
/// square grid of side `cell` before comparison. Score = matched cells over
/// occupied cells. Non-positive or non-finite `cell` falls back to `symmetry`.
pub fn symmetry_grid(sketch: &Sketch, cell: f64) -> f64 {
    if !(cell.is_finite() && cell > 0.0) {
        return symmetry(sketch);
    }
    let Some(ext) = Extent2::of(sketch.points()) else {
        return 0.0;
    };
    let center_x = ext.center_x();
    let bucket = |x: f64, y: f64| ((x / cell).round() as i64, (y / cell).round() as i64);
    let occupied: HashSet<(i64, i64)> = sketch.points().map(|p| bucket(p.x, p.y)).collect();
    let mut mirrored: HashSet<(i64, i64)> = HashSet::with_capacity(occupied.len());
    for p in sketch.points() {
        let key = bucket(center_x * 2.0 - p.x, p.y);
        if occupied.contains(&key) {
            mirrored.insert(bucket(p.x, p.y));
        }
    }
    mirrored.len() as f64 / occupied.len() as f64
}

/// Mean absolute segment angle `|atan2(dy, dx)|` over all consecutive point
/// pairs within each stroke. Lies in `[0, π]`; `0.0` without segments.
pub fn stroke_directionality(sketch: &Sketch) -> f64 {
    let mut sum = 0.0;
    let mut segments = 0usize;
    for path in &sketch.paths {
        for (a, b) in path.segments() {
            sum += (b.y - a.y).atan2(b.x - a.x).abs();
            segments += 1;
        }
    }
    if segments == 0 {
        0.0
    } else {
        sum / segments as f64
    }
}

/// Minimum-area oriented box of all sketch points.
pub fn min_box(sketch: &Sketch) -> Option<MinBox> {
    let res = min_area_box(&flatten(sketch));
    if res.is_none() {
        warn!(paths = sketch.paths.len(), "min_box: no points");
    }
    res
}

/// Width of the minimum-area oriented box.
pub fn min_box_width(sketch: &Sketch) -> Option<f64> {
    min_box(sketch).map(|b| b.width)
}

/// Height of the minimum-area oriented box.
pub fn min_box_height(sketch: &Sketch) -> Option<f64> {
    min_box(sketch).map(|b| b.height)
}
