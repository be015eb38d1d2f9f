//! Shape features for freehand sketches.
//!
//! A sketch is an ordered list of strokes, each an ordered list of 2D points.
//! This crate turns a sketch into a named, ordered vector of scalar features
//! for a nearest-neighbor classifier: stroke/point counts, aspect ratio,
//! mirror symmetry, stroke directionality, and the width/height of the
//! minimum-area oriented bounding box (convex hull + rotating calipers).
//!
//! API Policy
//! - Pure functions over borrowed input; no I/O, no global state.
//! - Feature order is explicit configuration (`Registry`), and every vector
//!   carries the schema that produced it.

pub mod api;
pub mod features;
pub mod geom2;
pub mod synth;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use features::{FeatureCfg, FeatureSchema, FeatureVector, Registry};
pub use geom2::{Path, Point, Sketch};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::features::{
        extract_batch, names, Feature, FeatureCfg, FeatureSchema, FeatureVector, Registry,
        DEFAULT_ACTIVE,
    };
    pub use crate::geom2::{convex_hull, flatten, min_area_box, MinBox, Path, Point, Sketch};
    pub use nalgebra::Vector2 as Vec2;
}
