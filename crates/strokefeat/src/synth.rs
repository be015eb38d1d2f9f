//! Synthetic sketches (random-walk strokes + replay tokens).
//!
//! Purpose
//! - Deterministic, indexable sketch streams for property tests, benches and
//!   demos. Nothing in the feature path depends on this module.
//!
//! Model
//! - Each stroke starts at a uniform point of `[0,1]²` and takes bounded random
//!   steps, clamped to the unit square.
//! - `draw_mirrored_sketch` builds strokes on a dyadic grid and adds their exact
//!   mirror about `x = 0.5`, so exact-match symmetry scores `1.0`.
//! - Determinism uses a replay token `(seed, index)` mixed into one RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom2::{Path, Point, Sketch};

/// Count distribution.
#[derive(Clone, Copy, Debug)]
pub enum Count {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl Count {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            Count::Fixed(n) => n,
            Count::Uniform { min, max } => rng.gen_range(min..=max.max(min)),
        }
    }
}

/// Random-walk sketch configuration.
#[derive(Clone, Copy, Debug)]
pub struct SketchCfg {
    pub paths: Count,
    pub points_per_path: Count,
    /// Maximum step length per coordinate.
    pub step: f64,
}

impl Default for SketchCfg {
    fn default() -> Self {
        Self {
            paths: Count::Uniform { min: 1, max: 4 },
            points_per_path: Count::Uniform { min: 2, max: 40 },
            step: 0.05,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }

    /// Token for the next sample of the same stream.
    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }
}

/// Draw a random-walk sketch.
pub fn draw_sketch(cfg: SketchCfg, tok: ReplayToken) -> Sketch {
    let mut rng = tok.to_std_rng();
    let step = cfg.step.max(0.0);
    let n_paths = cfg.paths.sample(&mut rng);
    let paths = (0..n_paths)
        .map(|_| {
            let n_pts = cfg.points_per_path.sample(&mut rng);
            let mut p = Vector2::new(rng.gen::<f64>(), rng.gen::<f64>());
            let mut points: Vec<Point> = Vec::with_capacity(n_pts);
            for _ in 0..n_pts {
                points.push(p);
                let dx = (rng.gen::<f64>() * 2.0 - 1.0) * step;
                let dy = (rng.gen::<f64>() * 2.0 - 1.0) * step;
                p = Vector2::new((p.x + dx).clamp(0.0, 1.0), (p.y + dy).clamp(0.0, 1.0));
            }
            Path::new(points)
        })
        .collect();
    Sketch::new(paths)
}

/// `n` consecutive sketches of one stream, starting at `tok`.
pub fn draw_sketches(cfg: SketchCfg, tok: ReplayToken, n: usize) -> Vec<Sketch> {
    let mut out = Vec::with_capacity(n);
    let mut t = tok;
    for _ in 0..n {
        out.push(draw_sketch(cfg, t));
        t = t.next();
    }
    out
}

/// Grid resolution of `draw_mirrored_sketch` (coordinates are multiples of 1/64).
pub const MIRROR_GRID: u32 = 64;

/// Draw a sketch whose point set is exactly mirror-symmetric about `x = 0.5`.
///
/// Half of the strokes are random; the other half are their reflections
/// `x -> 1 - x`. Coordinates are dyadic, so reflection and the extent midpoint
/// are exact in `f64`.
pub fn draw_mirrored_sketch(cfg: SketchCfg, tok: ReplayToken) -> Sketch {
    let mut rng = tok.to_std_rng();
    let g = MIRROR_GRID as f64;
    let n_paths = cfg.paths.sample(&mut rng).max(1);
    let mut paths = Vec::with_capacity(2 * n_paths);
    for _ in 0..n_paths {
        let n_pts = cfg.points_per_path.sample(&mut rng).max(1);
        let pts: Vec<Point> = (0..n_pts)
            .map(|_| {
                let i = rng.gen_range(0..=MIRROR_GRID) as f64;
                let j = rng.gen_range(0..=MIRROR_GRID) as f64;
                Vector2::new(i / g, j / g)
            })
            .collect();
        let mirrored: Vec<Point> = pts.iter().map(|p| Vector2::new(1.0 - p.x, p.y)).collect();
        paths.push(Path::new(pts));
        paths.push(Path::new(mirrored));
    }
    Sketch::new(paths)
}
