//! Sketch loading from JSON.
//!
//! Accepted shapes (top level):
//! - `[sample, ...]`
//! - `{ "samples": [sample, ...] }`
//!
//! where a sample is either a bare sketch `[[[x, y], ...], ...]` or an object
//! `{ "id"?: any, "label"?: string, "paths": [[[x, y], ...], ...] }`.
//! `id` and `label` are carried along for the output table only.

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;
use strokefeat::Sketch;

type RawPaths = Vec<Vec<Vec<f64>>>;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFile {
    List(Vec<RawSample>),
    Wrapped { samples: Vec<RawSample> },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSample {
    Bare(RawPaths),
    Tagged {
        #[serde(default)]
        id: Option<Value>,
        #[serde(default)]
        label: Option<String>,
        paths: RawPaths,
    },
}

/// Pass-through metadata of one sample.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SampleMeta {
    pub id: Option<String>,
    pub label: Option<String>,
}

/// Loaded samples: `meta[i]` describes `sketches[i]`.
#[derive(Debug, Default)]
pub struct Samples {
    pub meta: Vec<SampleMeta>,
    pub sketches: Vec<Sketch>,
}

impl Samples {
    pub fn len(&self) -> usize {
        self.sketches.len()
    }
}

/// Parse samples from a JSON string.
pub fn parse_samples(text: &str) -> Result<Samples> {
    let raw: RawFile = serde_json::from_str(text).context("parsing sketch JSON")?;
    let raw = match raw {
        RawFile::List(s) | RawFile::Wrapped { samples: s } => s,
    };
    let mut out = Samples {
        meta: Vec::with_capacity(raw.len()),
        sketches: Vec::with_capacity(raw.len()),
    };
    for (i, s) in raw.into_iter().enumerate() {
        let (meta, paths) = match s {
            RawSample::Bare(paths) => (SampleMeta::default(), paths),
            RawSample::Tagged { id, label, paths } => (
                SampleMeta {
                    id: id.map(id_string),
                    label,
                },
                paths,
            ),
        };
        let sketch = Sketch::try_from_nested(paths).with_context(|| format!("sample {i}"))?;
        out.meta.push(meta);
        out.sketches.push(sketch);
    }
    Ok(out)
}

/// Read and parse a sketch JSON file.
pub fn load_samples<P: AsRef<Path>>(path: P) -> Result<Samples> {
    let path = path.as_ref();
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_samples(&text).with_context(|| format!("loading {}", path.display()))
}

fn id_string(v: Value) -> String {
    match v {
        Value::String(s) => s,
        other => other.to_string(),
    }
}
