//! Extraction configuration.

/// Knobs for feature evaluation, passed explicitly to every extraction call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeatureCfg {
    /// Grid cell side used by `Symmetry (grid)`. Sized for `[0,1]²` input.
    pub symmetry_cell: f64,
}

impl Default for FeatureCfg {
    fn default() -> Self {
        Self {
            symmetry_cell: 1e-3,
        }
    }
}
