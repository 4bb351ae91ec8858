// src/bin/import_keywords.rs
use anyhow::Result;
use clap::Parser;
use log::info;
use std::path::PathBuf;

use seo_lib::keywords::{read_keyword_file, seed_keywords};
use seo_lib::seeder::{open_store, seed_keyword_rows};
use seo_lib::utils::env::load_env;
use seo_lib::utils::progress_config::ProgressConfig;

#[derive(Parser)]
#[command(author, version, about = "Import SEO keywords into seo_keywords", long_about = None)]
struct ImportArgs {
    /// Numbered markdown keyword list to import after the built-in keywords
    #[arg(long)]
    file: Option<PathBuf>,

    /// Seed an in-memory store and print the summary without touching PostgreSQL
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    load_env();
    let args = ImportArgs::parse();

    let mut keywords = seed_keywords();
    info!("Loaded {} built-in keywords", keywords.len());
    if let Some(path) = &args.file {
        let parsed = read_keyword_file(path)?;
        keywords.extend(parsed.iter().map(|k| k.to_new_keyword()));
    }

    let store = open_store(args.dry_run).await?;
    let stats = seed_keyword_rows(store.as_ref(), &keywords, &ProgressConfig::from_env(), args.dry_run).await;

    info!("=== Keyword Import Summary ===");
    info!("Created: {}", stats.created);
    info!("Skipped (already present): {}", stats.skipped);
    info!("Errors: {}", stats.errored);
    info!("Rows in seo_keywords: {}", store.count_keywords().await?);
    Ok(())
}
