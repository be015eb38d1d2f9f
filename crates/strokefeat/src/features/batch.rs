//! Batch extraction across many sketches.
//!
//! Sketches are independent, so the batch fans out on the rayon pool; output
//! order always matches input order.

use rayon::prelude::*;
use tracing::debug;

use super::cfg::FeatureCfg;
use super::registry::{FeatureVector, Registry};
use crate::geom2::Sketch;

/// Feature vectors for `sketches`, in input order, computed in parallel.
pub fn extract_batch(
    registry: &Registry,
    sketches: &[Sketch],
    cfg: FeatureCfg,
) -> Vec<FeatureVector> {
    debug!(
        sketches = sketches.len(),
        features = registry.len(),
        "extract_batch"
    );
    sketches
        .par_iter()
        .map(|s| registry.extract(s, cfg))
        .collect()
}

/// Sequential twin of `extract_batch`; same output.
pub fn extract_all(
    registry: &Registry,
    sketches: &[Sketch],
    cfg: FeatureCfg,
) -> Vec<FeatureVector> {
    sketches.iter().map(|s| registry.extract(s, cfg)).collect()
}
