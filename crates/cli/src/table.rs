//! Feature tables: polars frames for CSV/Parquet, serde rows for JSON.
//!
//! Layout: optional `id` and `label` columns first, then one `f64` column per
//! schema entry in schema order. A no-result value is a null cell.

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::Path;
use strokefeat::{FeatureSchema, FeatureVector};

use crate::input::SampleMeta;

/// Pass-through columns that precede the feature columns.
pub const META_COLUMNS: [&str; 2] = ["id", "label"];

/// Output encodings, chosen by file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Csv,
    Json,
    Parquet,
}

impl Format {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("csv") => Ok(Format::Csv),
            Some("json") => Ok(Format::Json),
            Some("parquet") => Ok(Format::Parquet),
            other => bail!("unsupported output extension {other:?} (.csv, .json, .parquet)"),
        }
    }
}

/// Build the feature frame for `meta` and their vectors (same order).
pub fn to_frame(
    schema: &FeatureSchema,
    meta: &[SampleMeta],
    vectors: &[FeatureVector],
) -> Result<DataFrame> {
    let mut columns: Vec<Series> = Vec::with_capacity(schema.len() + 2);
    if meta.iter().any(|m| m.id.is_some()) {
        let ids: Vec<Option<String>> = meta.iter().map(|m| m.id.clone()).collect();
        columns.push(Series::new("id".into(), ids));
    }
    if meta.iter().any(|m| m.label.is_some()) {
        let labels: Vec<Option<String>> = meta.iter().map(|m| m.label.clone()).collect();
        columns.push(Series::new("label".into(), labels));
    }
    for (k, name) in schema.names().iter().enumerate() {
        let values: Vec<Option<f64>> = vectors.iter().map(|v| v.values[k]).collect();
        columns.push(Series::new((*name).into(), values));
    }
    DataFrame::new(columns).context("assembling feature frame")
}

#[derive(Serialize)]
struct JsonTable<'a> {
    schema: &'a [&'static str],
    rows: Vec<JsonRow<'a>>,
}

/// Read side of `JsonTable`; rows are not needed to check a layout.
#[derive(Deserialize)]
struct StoredJsonTable {
    schema: Vec<String>,
}

#[derive(Serialize)]
struct JsonRow<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<&'a str>,
    values: &'a [Option<f64>],
}

/// Write the table to `out` in `format`.
pub fn write_table(
    out: &Path,
    format: Format,
    schema: &FeatureSchema,
    meta: &[SampleMeta],
    vectors: &[FeatureVector],
) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    match format {
        Format::Json => {
            let doc = JsonTable {
                schema: schema.names(),
                rows: meta
                    .iter()
                    .zip(vectors.iter())
                    .map(|(m, v)| JsonRow {
                        id: m.id.as_deref(),
                        label: m.label.as_deref(),
                        values: &v.values,
                    })
                    .collect(),
            };
            fs::write(out, serde_json::to_vec_pretty(&doc)?)
                .with_context(|| format!("writing {}", out.display()))?;
        }
        Format::Csv => {
            let mut df = to_frame(schema, meta, vectors)?;
            let mut file =
                File::create(out).with_context(|| format!("creating {}", out.display()))?;
            CsvWriter::new(&mut file)
                .include_header(true)
                .finish(&mut df)
                .with_context(|| format!("writing {}", out.display()))?;
        }
        Format::Parquet => {
            let mut df = to_frame(schema, meta, vectors)?;
            let file =
                File::create(out).with_context(|| format!("creating {}", out.display()))?;
            ParquetWriter::new(file)
                .finish(&mut df)
                .with_context(|| format!("writing {}", out.display()))?;
        }
    }
    Ok(())
}

/// Feature names stored in an existing table, in column order.
///
/// CSV and Parquet report their columns minus `META_COLUMNS`; JSON reports
/// the `schema` field written alongside its rows.
pub fn read_feature_columns(path: &Path, format: Format) -> Result<Vec<String>> {
    let df = match format {
        Format::Json => {
            let text =
                fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            let doc: StoredJsonTable = serde_json::from_str(&text)
                .with_context(|| format!("parsing table {}", path.display()))?;
            return Ok(doc.schema);
        }
        Format::Csv => LazyCsvReader::new(path)
            .with_infer_schema_length(Some(100))
            .finish()?
            .limit(0)
            .collect(),
        Format::Parquet => LazyFrame::scan_parquet(path, ScanArgsParquet::default())?
            .limit(0)
            .collect(),
    }
    .with_context(|| format!("reading columns of {}", path.display()))?;
    Ok(df
        .get_column_names()
        .iter()
        .map(|c| c.to_string())
        .filter(|c| !META_COLUMNS.contains(&c.as_str()))
        .collect())
}
