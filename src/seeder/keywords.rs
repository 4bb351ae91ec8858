// src/seeder/keywords.rs

use super::logging::{SeedLogger, SeedTarget};
use super::store::SeoStore;
use super::SeedStats;
use crate::models::NewKeyword;
use crate::utils::constants::SEED_PROGRESS_INTERVAL;
use crate::utils::progress_config::ProgressConfig;

/// Inserts keywords whose slug is not stored yet. Existing slugs are skipped, never updated.
pub async fn seed_keyword_rows(
    store: &dyn SeoStore,
    keywords: &[NewKeyword],
    progress: &ProgressConfig,
    dry_run: bool,
) -> SeedStats {
    let logger = SeedLogger::new(SeedTarget::Keywords);
    logger.log_start(keywords.len(), dry_run);

    let mp = progress.create_multi_progress();
    let bar = progress.add_bar(mp.as_ref(), keywords.len() as u64, "Seeding keywords");
    let mut stats = SeedStats::default();

    for (i, keyword) in keywords.iter().enumerate() {
        let result = match store.find_keyword_by_slug(&keyword.slug).await {
            Ok(Some(_)) => Ok(false),
            Ok(None) => store.insert_keyword(keyword).await.map(|_| true),
            Err(e) => Err(e),
        };
        match result {
            Ok(true) => stats.created += 1,
            Ok(false) => stats.skipped += 1,
            Err(e) => {
                logger.log_record_error(&keyword.keyword, &e);
                stats.errored += 1;
            }
        }

        if let Some(pb) = &bar {
            pb.inc(1);
        }
        if (i + 1) % SEED_PROGRESS_INTERVAL == 0 {
            logger.log_progress(i + 1, keywords.len());
        }
    }

    if let Some(pb) = &bar {
        pb.finish_with_message("Keywords seeded");
    }
    logger.log_summary(&stats);
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keywords::seed_keywords;
    use crate::models::KeywordCategory;
    use crate::seeder::InMemoryStore;

    #[tokio::test]
    async fn test_keyword_seeding_is_idempotent() {
        let keywords = seed_keywords();
        let store = InMemoryStore::new();
        let progress = ProgressConfig::disabled();

        let first = seed_keyword_rows(&store, &keywords, &progress, true).await;
        assert_eq!(first.created, keywords.len());
        let second = seed_keyword_rows(&store, &keywords, &progress, true).await;
        assert_eq!(second.created, 0);
        assert_eq!(second.skipped, keywords.len());
        assert_eq!(store.count_keywords().await.unwrap(), keywords.len() as i64);
    }

    #[tokio::test]
    async fn test_duplicate_slugs_in_one_batch_are_skipped() {
        let keywords = vec![
            NewKeyword::new("Box Braids", KeywordCategory::Hair, 1),
            NewKeyword::new("box  braids", KeywordCategory::Hair, 2),
            NewKeyword::new("Gel Nails", KeywordCategory::Nails, 1),
        ];
        let store = InMemoryStore::with_failing_slugs(["gel-nails"]);
        let stats = seed_keyword_rows(&store, &keywords, &ProgressConfig::disabled(), true).await;
        assert_eq!((stats.created, stats.skipped, stats.errored), (1, 1, 1));
        let stored = store.keywords().unwrap();
        assert_eq!(stored[0].priority, 1);
    }
}
