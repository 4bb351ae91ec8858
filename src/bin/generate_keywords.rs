// src/bin/generate_keywords.rs
use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use seo_lib::keywords::catalog::{LOCATIONS, PREFIX_MODIFIERS, SERVICES, SUFFIX_MODIFIERS};
use seo_lib::keywords::{KeywordMatrix, KeywordShapeConfig, KeywordStats};
use seo_lib::utils::env::load_env;

#[derive(Parser)]
#[command(author, version, about = "Generate the SEO keyword matrix", long_about = None)]
struct GenerateArgs {
    /// Output file, one keyword per line
    #[arg(long, default_value = "keyword_list.txt")]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    load_env();
    let args = GenerateArgs::parse();
    let start_time = Instant::now();

    info!("🚀 Generating keyword matrix");
    info!(
        "Inputs: {} services, {} locations, {} prefixes, {} suffixes",
        SERVICES.len(),
        LOCATIONS.len(),
        PREFIX_MODIFIERS.len(),
        SUFFIX_MODIFIERS.len()
    );
    let config = KeywordShapeConfig::from_env();
    config.log_config();

    let matrix = KeywordMatrix::new(config);
    let (keywords, report) = matrix.generate(&SERVICES, &LOCATIONS, &PREFIX_MODIFIERS, &SUFFIX_MODIFIERS);
    for (shape, count) in &report.per_shape {
        info!("   {}: {}", shape.label(), count);
    }

    let file = File::create(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;
    let mut writer = BufWriter::new(file);
    for keyword in &keywords {
        writeln!(writer, "{}", keyword)
            .with_context(|| format!("Failed to write {}", args.output.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to flush {}", args.output.display()))?;
    info!("💾 Saved {} keywords to {}", keywords.len(), args.output.display());

    KeywordStats::compute(&keywords, &SERVICES, &LOCATIONS).log_summary();
    info!("Total time: {:.2?}", start_time.elapsed());
    Ok(())
}
