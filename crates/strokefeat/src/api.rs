//! Flat re-export surface for callers that want one import path.
//!
//! Mirrors the module tree; no additional behavior lives here.

// Geometry
pub use crate::geom2::{
    convex_hull, flatten, hull_contains, min_area_box, orientation, rotated_extent, Extent2,
    MinBox, Path, Point, Sketch, SketchError,
};
// Scalar features
pub use crate::features::scalar::{
    aspect_ratio, min_box, min_box_height, min_box_width, path_count, point_count,
    stroke_directionality, symmetry, symmetry_grid,
};
// Registry and vectors
pub use crate::features::{
    builtin, extract_all, extract_batch, names, Feature, FeatureCfg, FeatureCtx, FeatureFn,
    FeatureSchema, FeatureVector, Registry, RegistryError, SchemaError, BUILTINS, DEFAULT_ACTIVE,
};
// Synthetic input
pub use crate::synth::{
    draw_mirrored_sketch, draw_sketch, draw_sketches, Count, ReplayToken, SketchCfg,
};
