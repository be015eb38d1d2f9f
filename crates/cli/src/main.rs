use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use std::path::Path;
use strokefeat::features::{extract_batch, FeatureCfg, Registry};
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;
mod table;

use provenance::{write_sidecar, Payload};
use table::{read_feature_columns, write_table, Format};

#[derive(Parser)]
#[command(name = "strokefeat-cli")]
#[command(about = "Extract shape feature vectors from sketch files")]
struct Cmd {
    /// Optional run tag; propagated to outputs and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

/// Which features are active, and in what order.
#[derive(Args, Clone, Debug)]
struct Selection {
    /// Comma-separated feature names (vector order). Defaults to the default active set.
    #[arg(long, value_delimiter = ',', conflicts_with = "all")]
    features: Option<Vec<String>>,
    /// Use every builtin feature
    #[arg(long)]
    all: bool,
}

impl Selection {
    fn registry(&self) -> Result<Registry> {
        Ok(match (&self.features, self.all) {
            (Some(names), _) => Registry::select(names.as_slice())?,
            (None, true) => Registry::catalog(),
            (None, false) => Registry::default_active(),
        })
    }
}

#[derive(Subcommand)]
enum Action {
    /// Compute feature vectors for every sketch in a JSON file
    Extract {
        #[arg(long)]
        input: String,
        /// Output table (.csv, .json or .parquet); a provenance sidecar is written next to it
        #[arg(long)]
        out: String,
        #[command(flatten)]
        selection: Selection,
        /// Grid cell for "Symmetry (grid)"
        #[arg(long)]
        symmetry_cell: Option<f64>,
    },
    /// Print the ordered feature names of a selection
    Features {
        #[command(flatten)]
        selection: Selection,
    },
    /// Verify that a feature table matches a selection's schema
    Check {
        #[arg(long)]
        table: String,
        #[command(flatten)]
        selection: Selection,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Extract {
            input,
            out,
            selection,
            symmetry_cell,
        } => extract(input, out, selection, symmetry_cell, cmd.tag),
        Action::Features { selection } => features(selection),
        Action::Check { table, selection } => check(table, selection),
        Action::Report => report(cmd.tag),
    }
}

fn extract(
    input: String,
    out: String,
    selection: Selection,
    symmetry_cell: Option<f64>,
    tag: Option<String>,
) -> Result<()> {
    let registry = selection.registry()?;
    let out_path = Path::new(&out);
    let format = Format::from_path(out_path)?;
    let mut cfg = FeatureCfg::default();
    if let Some(cell) = symmetry_cell {
        if !(cell.is_finite() && cell > 0.0) {
            bail!("--symmetry-cell must be a positive number, got {cell}");
        }
        cfg.symmetry_cell = cell;
    }
    tracing::info!(
        input,
        out,
        features = ?registry.schema().names(),
        tag = ?tag,
        "extract"
    );

    let samples = input::load_samples(&input)?;
    tracing::debug!(samples = samples.len(), "loaded");
    let vectors = extract_batch(&registry, &samples.sketches, cfg);
    let incomplete = vectors.iter().filter(|v| !v.is_complete()).count();
    if incomplete > 0 {
        tracing::warn!(incomplete, "some sketches have no-result features (empty input)");
    }
    write_table(out_path, format, registry.schema(), &samples.meta, &vectors)?;
    tracing::info!(rows = vectors.len(), "table_written");

    let payload = Payload::new(serde_json::json!({
        "input": input,
        "symmetry_cell": cfg.symmetry_cell,
        "rows": vectors.len(),
    }))
    .with_schema(registry.schema())
    .with_tag(tag);
    let prov = write_sidecar(out_path, payload)?;
    tracing::info!(provenance = %prov.display(), "provenance_written");
    Ok(())
}

fn features(selection: Selection) -> Result<()> {
    let registry = selection.registry()?;
    for name in registry.schema().names() {
        println!("{name}");
    }
    Ok(())
}

fn check(table_path: String, selection: Selection) -> Result<()> {
    let registry = selection.registry()?;
    let path = Path::new(&table_path);
    let found = read_feature_columns(path, Format::from_path(path)?)?;
    tracing::info!(table = table_path, columns = found.len(), "check");
    registry.schema().ensure_names(&found)?;
    println!("ok: {} features match", found.len());
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "lib_version": strokefeat::VERSION,
        "tag": tag,
        "default_schema": Registry::default_active().schema().names(),
        "catalog": Registry::catalog().schema().names(),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
