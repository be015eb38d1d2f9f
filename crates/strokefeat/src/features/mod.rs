//! Scalar sketch features and the registry that orders them into vectors.
//!
//! Purpose
//! - `scalar`: independent pure functions `Sketch -> f64` (or `Option<f64>` for
//!   the min-box projections).
//! - `registry`: named, ordered feature sets; schema-tagged `FeatureVector`s.
//! - `batch`: many sketches at once, order-preserving.
//!
//! Degenerate input (empty sketch, single-point strokes, collinear points) is
//! never an error. Counts/ratios/scores fall back to `0.0`; `Width`/`Height`
//! report `None`.

mod batch;
mod cfg;
mod registry;
pub mod scalar;

pub use batch::{extract_all, extract_batch};
pub use cfg::FeatureCfg;
pub use registry::{
    builtin, names, Feature, FeatureCtx, FeatureFn, FeatureSchema, FeatureVector, Registry,
    RegistryError, SchemaError, BUILTINS, DEFAULT_ACTIVE,
};

#[cfg(test)]
mod tests;
