// src/bin/import_locations.rs
use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use seo_lib::models::LocationType;
use seo_lib::seeder::{open_store, seed_locations};
use seo_lib::taxonomy::{ClassificationSource, Gazetteer, ProvinceScope, TaxonomyBuilder};
use seo_lib::utils::env::load_env;
use seo_lib::utils::progress_config::ProgressConfig;

#[derive(Parser)]
#[command(author, version, about = "Import SEO locations into seo_locations", long_about = None)]
struct ImportArgs {
    /// Only import this province (slug or name), e.g. gauteng
    #[arg(long)]
    province: Option<String>,

    /// Seed an in-memory store and print the summary without touching PostgreSQL
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    load_env();
    let args = ImportArgs::parse();

    let gazetteer = Gazetteer::embedded().context("Failed to load location data")?;
    gazetteer.log_divergences();

    let scope = ProvinceScope::from_arg(args.province);
    let taxonomy = TaxonomyBuilder::new(gazetteer).build(&scope)?;
    let heuristic_count = taxonomy
        .places
        .iter()
        .filter(|p| p.source == ClassificationSource::Heuristic)
        .count();
    info!(
        "{} of {} places were classified by the name heuristic",
        heuristic_count,
        taxonomy.places.len()
    );

    let store = open_store(args.dry_run).await?;
    let report = seed_locations(store.as_ref(), &taxonomy, &ProgressConfig::from_env(), args.dry_run).await;
    let total = report.total();

    info!("=== Location Import Summary ===");
    info!("Provinces: {}", taxonomy.count_of(LocationType::Province));
    info!("Cities: {}", taxonomy.count_of(LocationType::City));
    info!("Towns: {}", taxonomy.count_of(LocationType::Town));
    info!("Suburbs: {}", taxonomy.count_of(LocationType::Suburb));
    info!(
        "Created: {}, Updated: {}, Unchanged: {}, Errors: {}",
        total.created, total.updated, total.skipped, total.errored
    );
    info!("Suburbs with parent city: {}", report.suburbs_with_parent);
    info!("Rows in seo_locations: {}", store.count_locations().await?);
    Ok(())
}
