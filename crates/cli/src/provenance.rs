use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;
use strokefeat::FeatureSchema;

/// Metadata used to generate a provenance sidecar.
pub struct Payload {
    pub params: Value,
    /// Ordered feature names of the artifact, if it is a feature table.
    pub schema: Vec<String>,
    pub tag: Option<String>,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self {
            params,
            schema: Vec::new(),
            tag: None,
        }
    }

    pub fn with_schema(mut self, schema: &FeatureSchema) -> Self {
        self.schema = schema.names().iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_tag(mut self, tag: Option<String>) -> Self {
        self.tag = tag;
        self
    }
}

/// Write `<artifact>.provenance.json` with the git commit, callsite, params,
/// feature schema and outputs.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    if let Some(parent) = provenance_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }

    let callsite = Location::caller();
    let doc = json!({
        "code_rev": current_git_rev(),
        "lib_version": strokefeat::VERSION,
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "tag": payload.tag,
        "schema": payload.schema,
        "params": payload.params,
        "outputs": [artifact.to_string_lossy()]
    });
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

/// `features.csv` -> `features.provenance.json`, in the same directory.
pub(crate) fn provenance_path(artifact: &Path) -> PathBuf {
    if artifact.file_stem().is_some() {
        artifact.with_extension("provenance.json")
    } else {
        artifact.join("artifact.provenance.json")
    }
}

/// Commit of the running code: `GIT_COMMIT` (build time, then run time), else
/// `git rev-parse HEAD`, else `"unknown"`.
pub fn current_git_rev() -> String {
    [
        option_env!("GIT_COMMIT").map(str::to_string),
        std::env::var("GIT_COMMIT").ok(),
    ]
    .into_iter()
    .flatten()
    .find(|rev| !rev.is_empty())
    .or_else(git_head)
    .unwrap_or_else(|| "unknown".to_string())
}

fn git_head() -> Option<String> {
    let output = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let rev = String::from_utf8(output.stdout).ok()?;
    Some(rev.trim().to_string())
}
