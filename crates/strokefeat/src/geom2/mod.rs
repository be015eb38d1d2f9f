//! 2D geometry for sketches: data model, primitives, hull, oriented boxes.
//!
//! Purpose
//! - Keep the geometric core small and exact: no tolerances in the hull or the
//!   box search, exact coordinate identity for points.
//! - Every routine is a pure function over borrowed input.
//!
//! Layout
//! - `types`: `Point`, `Path`, `Sketch`, `SketchError`.
//! - `util`: orientation test, flatten, axis-aligned `Extent2`.
//! - `hull`: monotone-chain convex hull (CCW, strictly convex).
//! - `calipers`: minimum-area oriented bounding box over hull edges.

mod calipers;
mod hull;
mod types;
mod util;

pub use calipers::{min_area_box, rotated_extent, MinBox};
pub use hull::{convex_hull, hull_contains};
pub use types::{Path, Point, Sketch, SketchError};
pub use util::{flatten, orientation, Extent2};

pub(crate) use util::point_key;

#[cfg(test)]
mod tests;
