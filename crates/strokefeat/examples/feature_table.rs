//! Print feature vectors for a few synthetic sketches.
//!
//! Usage:
//!   cargo run -p strokefeat --example feature_table -- [catalog|default]

use strokefeat::features::{extract_batch, FeatureCfg, Registry};
use strokefeat::synth::{draw_mirrored_sketch, draw_sketches, ReplayToken, SketchCfg};

fn main() {
    let mode = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "catalog".to_string());
    let registry = match mode.as_str() {
        "catalog" => Registry::catalog(),
        "default" => Registry::default_active(),
        _ => {
            eprintln!("usage: feature_table [catalog|default]");
            return;
        }
    };
    let tok = ReplayToken {
        seed: 2025,
        index: 0,
    };
    let mut sketches = draw_sketches(SketchCfg::default(), tok, 4);
    sketches.push(draw_mirrored_sketch(SketchCfg::default(), tok));

    println!("{}", registry.schema().names().join("\t"));
    for v in extract_batch(&registry, &sketches, FeatureCfg::default()) {
        let row: Vec<String> = v
            .values
            .iter()
            .map(|x| match x {
                Some(x) => format!("{x:.4}"),
                None => "-".to_string(),
            })
            .collect();
        println!("{}", row.join("\t"));
    }
}
