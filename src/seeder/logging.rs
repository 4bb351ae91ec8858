// src/seeder/logging.rs - Phase logging for seeding runs
use log::{info, warn};
use std::time::Instant;

use super::SeedStats;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedTarget {
    Locations,
    Keywords,
}

#[derive(Clone)]
pub struct SeedLogger {
    target_name: &'static str,
    target_emoji: &'static str,
    start_time: Instant,
}

impl SeedLogger {
    pub fn new(target: SeedTarget) -> Self {
        let (target_name, target_emoji) = match target {
            SeedTarget::Locations => ("LOCATIONS", "📍"),
            SeedTarget::Keywords => ("KEYWORDS", "🔑"),
        };
        Self {
            target_name,
            target_emoji,
            start_time: Instant::now(),
        }
    }

    pub fn log_start(&self, record_count: usize, dry_run: bool) {
        info!(
            "[{}] {} 🚀 Seeding {} records{}",
            self.target_name,
            self.target_emoji,
            record_count,
            if dry_run { " (dry run, in-memory store)" } else { "" }
        );
    }

    pub fn log_phase(&self, phase: &str, details: Option<&str>) {
        let elapsed = self.start_time.elapsed();
        match details {
            Some(details) => info!(
                "[{}] {} 🔄 Phase: {} - {} [+{:.1}s]",
                self.target_name, self.target_emoji, phase, details, elapsed.as_secs_f32()
            ),
            None => info!(
                "[{}] {} 🔄 Phase: {} [+{:.1}s]",
                self.target_name, self.target_emoji, phase, elapsed.as_secs_f32()
            ),
        }
    }

    pub fn log_progress(&self, processed: usize, total: usize) {
        info!(
            "[{}] {} ⏳ Processed {}/{} records",
            self.target_name, self.target_emoji, processed, total
        );
    }

    pub fn log_record_error(&self, name: &str, error: &anyhow::Error) {
        warn!(
            "[{}] {} ❌ Failed to seed '{}': {:#}",
            self.target_name, self.target_emoji, name, error
        );
    }

    pub fn log_summary(&self, stats: &SeedStats) {
        info!("=== {} Seeding Summary ===", self.target_name);
        info!("Created: {}", stats.created);
        info!("Updated: {}", stats.updated);
        info!("Skipped: {}", stats.skipped);
        info!("Errors: {}", stats.errored);
        info!(
            "[{}] {} ✅ Completed in {:.2}s",
            self.target_name,
            self.target_emoji,
            self.start_time.elapsed().as_secs_f64()
        );
    }
}
