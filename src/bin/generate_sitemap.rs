// src/bin/generate_sitemap.rs
use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::path::PathBuf;

use seo_lib::keywords::seed_keywords;
use seo_lib::models::NewLocation;
use seo_lib::seo::{DynamicSource, SitemapAssembler};
use seo_lib::seo::sitemap::write_sitemaps;
use seo_lib::taxonomy::{Gazetteer, ProvinceScope, TaxonomyBuilder};
use seo_lib::utils::constants::site_url;
use seo_lib::utils::env::load_env;

#[derive(Parser)]
#[command(author, version, about = "Render sitemap.xml and its chunks", long_about = None)]
struct SitemapArgs {
    /// Directory the sitemap files are written to
    #[arg(long, default_value = "public")]
    out_dir: PathBuf,

    /// Also emit keyword x location landing pages
    #[arg(long)]
    with_keywords: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    load_env();
    let args = SitemapArgs::parse();

    let site = site_url();
    info!("Generating sitemap for {}", site);
    let gazetteer = Gazetteer::embedded().context("Failed to load location data")?;
    let assembler = SitemapAssembler::new(&site, gazetteer, DynamicSource::from_env());
    let (mut entries, mut stats) = assembler.assemble().await?;

    if args.with_keywords {
        let taxonomy = TaxonomyBuilder::new(gazetteer).build(&ProvinceScope::All)?;
        let locations: Vec<NewLocation> = taxonomy
            .provinces
            .iter()
            .cloned()
            .chain(taxonomy.places.iter().map(|p| p.location.clone()))
            .collect();
        assembler.append_keyword_locations(&mut entries, &mut stats, &seed_keywords(), &locations);
    }

    let written = write_sitemaps(&args.out_dir, assembler.site_url(), &entries)?;
    stats.log_summary();
    for path in &written {
        info!("Wrote {}", path.display());
    }
    Ok(())
}
