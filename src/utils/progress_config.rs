// src/utils/progress_config.rs

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use log::warn;

use crate::utils::env::{env_bool, env_usize};

const BAR_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}";

/// Configuration for progress tracking throughout the seeding and generation runs
#[derive(Debug, Clone)]
pub struct ProgressConfig {
    /// Whether to show progress bars at all
    pub enabled: bool,
    /// Refresh rate for progress bars in milliseconds
    pub refresh_rate_ms: u64,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            refresh_rate_ms: 100,
        }
    }
}

impl ProgressConfig {
    /// Create progress configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            enabled: env_bool("PROGRESS_ENABLED", true),
            refresh_rate_ms: env_usize("PROGRESS_REFRESH_RATE_MS", 100) as u64,
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Create a MultiProgress instance if progress is enabled, None otherwise
    pub fn create_multi_progress(&self) -> Option<MultiProgress> {
        if self.enabled {
            Some(MultiProgress::new())
        } else {
            None
        }
    }

    /// Adds a bar of `len` steps to `mp`, styled like the rest of the pipeline.
    pub fn add_bar(&self, mp: Option<&MultiProgress>, len: u64, msg: &str) -> Option<ProgressBar> {
        let mp = mp?;
        let pb = mp.add(ProgressBar::new(len));
        match ProgressStyle::default_bar().template(BAR_TEMPLATE) {
            Ok(style) => pb.set_style(style.progress_chars("█▉▊▋▌▍▎▏  ")),
            Err(e) => warn!("Invalid progress bar template: {}", e),
        }
        pb.enable_steady_tick(std::time::Duration::from_millis(self.refresh_rate_ms));
        pb.set_message(msg.to_string());
        Some(pb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_config_creates_no_bars() {
        let config = ProgressConfig::disabled();
        let mp = config.create_multi_progress();
        assert!(mp.is_none());
        assert!(config.add_bar(mp.as_ref(), 10, "nothing").is_none());
    }

    #[test]
    fn test_enabled_config_creates_bar() {
        let config = ProgressConfig::default();
        let mp = config.create_multi_progress();
        let pb = config.add_bar(mp.as_ref(), 3, "working").expect("bar");
        assert_eq!(pb.length(), Some(3));
        pb.finish_and_clear();
    }
}
