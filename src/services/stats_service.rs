use anyhow::{Context, Result};
use chrono::Local;
use colored::Colorize;
use futures::stream::{self, StreamExt};
use log::{error, info};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::cache::{Cache, SnapshotStore};
use crate::config::settings::OutputSettings;
use crate::config::{find_category, get_categories, AppConfig, CategoryConfig};
use crate::domain::RecordSet;
use crate::export::{csv_writer, CategoryResult};
use crate::extract::{ExtractionOutcome, Extractor};
use crate::fetchers::{FetchedPage, StatsPageFetcher};
use crate::http::RateLimitedClient;
use crate::services::report_service;

/// Runs the statistic-category scrape end to end: fetch, extract, persist,
/// report. Categories share no mutable state and fan out across a small
/// bounded worker pool; one failed category never blocks its siblings.
pub struct StatsService {
    config: Arc<AppConfig>,
}

impl StatsService {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub async fn run(&self, only: Option<&str>) -> Result<()> {
        info!("=== Starting Stats Scrape ===\n");

        let categories = self.select_categories(only)?;
        self.create_output_dirs()?;

        let cache = Arc::new(Cache::new(self.config.output.cache_dir)?);
        let store = Arc::new(self.load_snapshot_store(&cache)?);
        let extractor = Arc::new(Extractor::new());
        // One client for the whole run; its limiter paces every fetch
        let client = Arc::new(Mutex::new(RateLimitedClient::from_settings(
            &self.config.scraper,
        )?));

        info!("  → Processing {} categories\n", categories.len());

        let outcomes: Vec<(CategoryResult, Option<RecordSet>)> = stream::iter(categories)
            .map(|category| {
                let config = Arc::clone(&self.config);
                let cache = Arc::clone(&cache);
                let store = Arc::clone(&store);
                let extractor = Arc::clone(&extractor);
                let client = Arc::clone(&client);
                async move {
                    Self::process_category(&config, &cache, &store, &extractor, client, category)
                        .await
                }
            })
            .buffer_unordered(self.config.scraper.max_workers)
            .collect()
            .await;

        let mut results = Vec::new();
        let mut produced = HashMap::new();
        for (result, set) in outcomes {
            if let Some(set) = set {
                produced.insert(set.category.clone(), set);
            }
            results.push(result);
        }

        report_service::write_reports(&self.config.output, &results, &produced)?;
        Self::print_run_summary(&results);

        info!("=== Scraping Complete ===");
        Ok(())
    }

    // --- Setup ---

    fn select_categories(&self, only: Option<&str>) -> Result<Vec<CategoryConfig>> {
        match only {
            Some(slug) => {
                let category =
                    find_category(slug).with_context(|| format!("Unknown category: {}", slug))?;
                Ok(vec![category])
            }
            None => Ok(get_categories()),
        }
    }

    fn create_output_dirs(&self) -> Result<()> {
        let output = &self.config.output;
        for dir in [output.batting_dir, output.bowling_dir, output.debug_dir] {
            fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir))?;
        }
        Ok(())
    }

    /// Snapshots from previous runs, read once; workers treat them read-only
    fn load_snapshot_store(&self, cache: &Cache) -> Result<SnapshotStore> {
        let known: Vec<&'static str> = get_categories().iter().map(|c| c.slug).collect();
        SnapshotStore::load(cache, &known)
    }

    // --- Per-Category Pipeline ---

    async fn process_category(
        config: &AppConfig,
        cache: &Cache,
        store: &SnapshotStore,
        extractor: &Extractor,
        client: Arc<Mutex<RateLimitedClient>>,
        category: CategoryConfig,
    ) -> (CategoryResult, Option<RecordSet>) {
        println!("{}", format!("===== Scraping {} =====", category.slug).cyan());

        let page = match Self::fetch_page(config, client, &category).await {
            Ok(page) => page,
            Err(e) => {
                error!("{}: fetch failed: {:#}", category.slug, e);
                println!("{}", format!("Error scraping {}: {:#}", category.slug, e).red());
                return (Self::failure(&category, None), None);
            }
        };

        match extractor.extract(&page.text, &category, store) {
            ExtractionOutcome::Success(set) => match Self::persist(config, cache, &category, &set)
            {
                Ok(file) => {
                    Self::print_preview(&category, &set);
                    (Self::success(&category, file), Some(set))
                }
                Err(e) => {
                    error!("{}: persist failed: {:#}", category.slug, e);
                    (Self::failure(&category, None), None)
                }
            },
            ExtractionOutcome::Failed { last_strategy } => {
                println!(
                    "{}",
                    format!(
                        "No data extracted for {} (last strategy: {})",
                        category.slug, last_strategy
                    )
                    .yellow()
                );
                (Self::failure(&category, Some(last_strategy.as_str())), None)
            }
        }
    }

    async fn fetch_page(
        config: &AppConfig,
        client: Arc<Mutex<RateLimitedClient>>,
        category: &CategoryConfig,
    ) -> Result<FetchedPage> {
        let fetcher = StatsPageFetcher::new(client, &config.scraper);
        let page = fetcher.fetch(category.slug).await?;
        Self::write_debug_dumps(&config.output, category.slug, &page)?;
        Ok(page)
    }

    /// Keep the raw markup and flattened text around for manual inspection
    /// when a strategy chain comes back empty
    fn write_debug_dumps(output: &OutputSettings, slug: &str, page: &FetchedPage) -> Result<()> {
        let html_path = PathBuf::from(output.debug_dir).join(format!("page_{}.html", slug));
        fs::write(&html_path, &page.html)
            .with_context(|| format!("Failed to write {}", html_path.display()))?;

        let text_path = PathBuf::from(output.debug_dir).join(format!("text_{}.txt", slug));
        fs::write(&text_path, page.text.raw())
            .with_context(|| format!("Failed to write {}", text_path.display()))?;
        Ok(())
    }

    /// CSV for the operator, JSON snapshot for the next run's derivations.
    /// Both writes happen at the end of this category's processing, so the
    /// snapshot store other workers read stays untouched mid-run.
    fn persist(
        config: &AppConfig,
        cache: &Cache,
        category: &CategoryConfig,
        set: &RecordSet,
    ) -> Result<String> {
        let dir = match category.group {
            crate::config::StatGroup::Batting => config.output.batting_dir,
            crate::config::StatGroup::Bowling => config.output.bowling_dir,
        };
        let file_name = format!(
            "ipl_{}_{}.csv",
            category.slug,
            Local::now().format("%Y%m%d")
        );
        let path = PathBuf::from(dir).join(&file_name);

        csv_writer::write_record_set(&path, set, &category.schema)?;
        cache.save_snapshot(set)?;

        Ok(path.display().to_string())
    }

    // --- Console Output ---

    fn print_preview(category: &CategoryConfig, set: &RecordSet) {
        println!(
            "{}",
            format!("Extracted {} entries for {}", set.len(), category.slug).green()
        );
        let metric = category.schema.headline_metric();
        for record in set.records.iter().take(5) {
            let value = record
                .metric(metric)
                .map(|v| v.to_string())
                .unwrap_or_default();
            println!(
                "  {:>2}. {} ({}) - {} {}",
                record.rank, record.identity, record.team, metric, value
            );
        }
    }

    fn print_run_summary(results: &[CategoryResult]) {
        println!("{}", "===== Scraping Summary =====".cyan());
        for result in results {
            let status = if result.success {
                "Success".green()
            } else {
                "Failed".red()
            };
            println!("{}: {}", result.slug, status);
        }
    }

    fn success(category: &CategoryConfig, file: String) -> CategoryResult {
        CategoryResult {
            slug: category.slug.to_string(),
            group: category.group,
            success: true,
            file: Some(file),
            failed_strategy: None,
        }
    }

    fn failure(category: &CategoryConfig, last_strategy: Option<&str>) -> CategoryResult {
        CategoryResult {
            slug: category.slug.to_string(),
            group: category.group,
            success: false,
            file: None,
            failed_strategy: last_strategy.map(str::to_string),
        }
    }
}
