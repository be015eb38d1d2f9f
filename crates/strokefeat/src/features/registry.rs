//! Feature registry: ordered `{name, function}` pairs and schema-tagged vectors.
//!
//! Notes
//! - The registry order is the vector schema. Callers build the registry they
//!   want and pass it around; nothing here is process-global.
//! - Every `FeatureVector` carries the `FeatureSchema` that produced it;
//!   consumers check it with `FeatureSchema::ensure_compatible`.
//!
//! Code cross-refs: `scalar::*`, `cfg::FeatureCfg`, `batch::extract_batch`

use std::cell::OnceCell;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use super::cfg::FeatureCfg;
use super::scalar;
use crate::geom2::{MinBox, Sketch};

/// Names of the builtin features, in catalog order.
pub mod names {
    pub const PATH_COUNT: &str = "Path Count";
    pub const POINT_COUNT: &str = "Point Count";
    pub const ASPECT_RATIO: &str = "Aspect Ratio";
    pub const SYMMETRY: &str = "Symmetry";
    pub const SYMMETRY_GRID: &str = "Symmetry (grid)";
    pub const STROKE_DIRECTIONALITY: &str = "Stroke Directionality";
    pub const WIDTH: &str = "Width";
    pub const HEIGHT: &str = "Height";
}

/// Default active feature set, in vector order.
pub const DEFAULT_ACTIVE: [&str; 2] = [names::HEIGHT, names::WIDTH];

/// Per-sketch evaluation context.
///
/// Lives for one extraction call. The min-area box is computed at most once
/// and shared by `Width` and `Height`.
pub struct FeatureCtx<'a> {
    pub sketch: &'a Sketch,
    pub cfg: FeatureCfg,
    min_box: OnceCell<Option<MinBox>>,
}

impl<'a> FeatureCtx<'a> {
    pub fn new(sketch: &'a Sketch, cfg: FeatureCfg) -> Self {
        Self {
            sketch,
            cfg,
            min_box: OnceCell::new(),
        }
    }

    /// Minimum-area oriented box, computed on first use.
    pub fn min_box(&self) -> Option<MinBox> {
        *self.min_box.get_or_init(|| scalar::min_box(self.sketch))
    }
}

/// Feature function. `None` is the explicit no-result marker.
pub type FeatureFn = fn(&FeatureCtx<'_>) -> Option<f64>;

/// A named feature.
#[derive(Clone, Copy)]
pub struct Feature {
    pub name: &'static str,
    pub eval: FeatureFn,
}

impl fmt::Debug for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Feature").field("name", &self.name).finish()
    }
}

impl Feature {
    #[inline]
    pub const fn new(name: &'static str, eval: FeatureFn) -> Self {
        Self { name, eval }
    }
}

/// Every builtin feature, in catalog order.
pub const BUILTINS: [Feature; 8] = [
    Feature::new(names::PATH_COUNT, eval_path_count),
    Feature::new(names::POINT_COUNT, eval_point_count),
    Feature::new(names::ASPECT_RATIO, eval_aspect_ratio),
    Feature::new(names::SYMMETRY, eval_symmetry),
    Feature::new(names::SYMMETRY_GRID, eval_symmetry_grid),
    Feature::new(names::STROKE_DIRECTIONALITY, eval_stroke_directionality),
    Feature::new(names::WIDTH, eval_width),
    Feature::new(names::HEIGHT, eval_height),
];

fn eval_path_count(c: &FeatureCtx<'_>) -> Option<f64> {
    Some(scalar::path_count(c.sketch))
}
fn eval_point_count(c: &FeatureCtx<'_>) -> Option<f64> {
    Some(scalar::point_count(c.sketch))
}
fn eval_aspect_ratio(c: &FeatureCtx<'_>) -> Option<f64> {
    Some(scalar::aspect_ratio(c.sketch))
}
fn eval_symmetry(c: &FeatureCtx<'_>) -> Option<f64> {
    Some(scalar::symmetry(c.sketch))
}
fn eval_symmetry_grid(c: &FeatureCtx<'_>) -> Option<f64> {
    Some(scalar::symmetry_grid(c.sketch, c.cfg.symmetry_cell))
}
fn eval_stroke_directionality(c: &FeatureCtx<'_>) -> Option<f64> {
    Some(scalar::stroke_directionality(c.sketch))
}
// Width and height project the same shared box.
fn eval_width(c: &FeatureCtx<'_>) -> Option<f64> {
    c.min_box().map(|b| b.width)
}
fn eval_height(c: &FeatureCtx<'_>) -> Option<f64> {
    c.min_box().map(|b| b.height)
}

/// Look up a builtin feature by name.
pub fn builtin(name: &str) -> Option<Feature> {
    BUILTINS.iter().copied().find(|f| f.name == name)
}

/// Ordered feature names that define a vector layout.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FeatureSchema {
    names: Arc<[&'static str]>,
}

impl FeatureSchema {
    #[inline]
    pub fn names(&self) -> &[&'static str] {
        &self.names
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Position of `name` in the layout.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| *n == name)
    }

    /// `Ok` iff `other` lists the same names in the same order.
    pub fn ensure_compatible(&self, other: &FeatureSchema) -> Result<(), SchemaError> {
        self.ensure_names(other.names())
    }

    /// Like `ensure_compatible`, for names read back from storage (CSV headers,
    /// provenance sidecars).
    pub fn ensure_names<S: AsRef<str>>(&self, found: &[S]) -> Result<(), SchemaError> {
        if self.names.len() != found.len() {
            return Err(SchemaError::LengthMismatch {
                expected: self.names.len(),
                found: found.len(),
            });
        }
        for (i, (a, b)) in self.names.iter().zip(found.iter()).enumerate() {
            if *a != b.as_ref() {
                return Err(SchemaError::NameMismatch {
                    index: i,
                    expected: a.to_string(),
                    found: b.as_ref().to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Feature values of one sketch, tagged with their schema.
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureVector {
    pub schema: FeatureSchema,
    pub values: Vec<Option<f64>>,
}

impl FeatureVector {
    /// `(name, value)` pairs in schema order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, Option<f64>)> + '_ {
        self.schema
            .names
            .iter()
            .copied()
            .zip(self.values.iter().copied())
    }

    /// Value of feature `name`; outer `None` if the schema lacks it.
    pub fn get(&self, name: &str) -> Option<Option<f64>> {
        self.schema.index_of(name).map(|i| self.values[i])
    }

    /// True if no entry is a no-result marker.
    pub fn is_complete(&self) -> bool {
        self.values.iter().all(Option::is_some)
    }
}

/// Ordered set of active features.
#[derive(Clone, Debug)]
pub struct Registry {
    features: Vec<Feature>,
    schema: FeatureSchema,
}

impl Registry {
    /// Build from an explicit list. Names must be unique.
    pub fn new(features: Vec<Feature>) -> Result<Self, RegistryError> {
        let mut seen = HashSet::with_capacity(features.len());
        for f in &features {
            if !seen.insert(f.name) {
                return Err(RegistryError::DuplicateFeature {
                    name: f.name.to_string(),
                });
            }
        }
        let schema = FeatureSchema {
            names: features.iter().map(|f| f.name).collect(),
        };
        Ok(Self { features, schema })
    }

    /// Every builtin feature.
    pub fn catalog() -> Self {
        Self::from_unique(BUILTINS.to_vec())
    }

    /// The `DEFAULT_ACTIVE` set.
    pub fn default_active() -> Self {
        Self::from_unique(
            DEFAULT_ACTIVE
                .iter()
                .filter_map(|n| builtin(n))
                .collect(),
        )
    }

    /// Builtins by name, in the given order.
    pub fn select<S: AsRef<str>>(names: &[S]) -> Result<Self, RegistryError> {
        let mut features = Vec::with_capacity(names.len());
        for n in names {
            let n = n.as_ref();
            let f = builtin(n).ok_or_else(|| RegistryError::UnknownFeature {
                name: n.to_string(),
            })?;
            features.push(f);
        }
        Self::new(features)
    }

    fn from_unique(features: Vec<Feature>) -> Self {
        let schema = FeatureSchema {
            names: features.iter().map(|f| f.name).collect(),
        };
        Self { features, schema }
    }

    #[inline]
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    #[inline]
    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Evaluate every active feature on `sketch`, in registry order.
    pub fn extract(&self, sketch: &Sketch, cfg: FeatureCfg) -> FeatureVector {
        let ctx = FeatureCtx::new(sketch, cfg);
        FeatureVector {
            schema: self.schema.clone(),
            values: self.features.iter().map(|f| (f.eval)(&ctx)).collect(),
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::default_active()
    }
}

/// Errors building a registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    UnknownFeature { name: String },
    DuplicateFeature { name: String },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownFeature { name } => write!(f, "unknown feature: {name:?}"),
            Self::DuplicateFeature { name } => write!(f, "feature listed twice: {name:?}"),
        }
    }
}

impl std::error::Error for RegistryError {}

/// Two schemas disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    LengthMismatch {
        expected: usize,
        found: usize,
    },
    NameMismatch {
        index: usize,
        expected: String,
        found: String,
    },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, found } => write!(
                f,
                "schema length mismatch: expected {expected} features, found {found}"
            ),
            Self::NameMismatch {
                index,
                expected,
                found,
            } => write!(
                f,
                "schema mismatch at position {index}: expected {expected:?}, found {found:?}"
            ),
        }
    }
}

impl std::error::Error for SchemaError {}
