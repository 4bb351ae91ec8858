// src/main.rs
use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::time::Instant;

use seo_lib::keywords::seed_keywords;
use seo_lib::seeder::{open_store, seed_keyword_rows, seed_locations};
use seo_lib::taxonomy::{Gazetteer, ProvinceScope, TaxonomyBuilder};
use seo_lib::utils::env::load_env;
use seo_lib::utils::progress_config::ProgressConfig;

#[derive(Parser)]
#[command(author, version, about = "Seed SEO locations and keywords", long_about = None)]
struct SeedArgs {
    /// Seed an in-memory store instead of PostgreSQL
    #[arg(long)]
    dry_run: bool,

    /// Only seed locations for this province (slug or name)
    #[arg(long)]
    province: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    info!("Starting Stylr SA SEO seeding pipeline");
    load_env();
    let args = SeedArgs::parse();
    let start_time = Instant::now();

    let progress = ProgressConfig::from_env();
    info!("Progress tracking: enabled={}", progress.enabled);

    let gazetteer = Gazetteer::embedded().context("Failed to load location data")?;
    gazetteer.log_divergences();

    let scope = ProvinceScope::from_arg(args.province);
    let taxonomy = TaxonomyBuilder::new(gazetteer)
        .build(&scope)
        .context("Failed to build location taxonomy")?;

    let store = open_store(args.dry_run).await?;

    let location_report = seed_locations(store.as_ref(), &taxonomy, &progress, args.dry_run).await;
    let keywords = seed_keywords();
    let keyword_stats = seed_keyword_rows(store.as_ref(), &keywords, &progress, args.dry_run).await;

    let location_count = store.count_locations().await?;
    let keyword_count = store.count_keywords().await?;
    let locations = location_report.total();

    info!("=== Seeding Summary ===");
    info!(
        "Locations: {} created, {} updated, {} unchanged, {} errors",
        locations.created, locations.updated, locations.skipped, locations.errored
    );
    info!(
        "Suburbs linked to a city: {} ({} without a parent)",
        location_report.suburbs_with_parent, location_report.orphaned_suburbs
    );
    info!(
        "Keywords: {} created, {} skipped, {} errors",
        keyword_stats.created, keyword_stats.skipped, keyword_stats.errored
    );
    info!("Stored rows: {} locations, {} keywords", location_count, keyword_count);
    info!("Total time: {:.2?}", start_time.elapsed());
    Ok(())
}
