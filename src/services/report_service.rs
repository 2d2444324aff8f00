use anyhow::{Context, Result};
use chrono::Local;
use log::info;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::cache::Cache;
use crate::config::settings::OutputSettings;
use crate::config::{get_categories, AppConfig};
use crate::domain::RecordSet;
use crate::export::report::{render_html, Summary};
use crate::export::CategoryResult;

/// Write the JSON summary and static HTML report for one run
pub fn write_reports(
    output: &OutputSettings,
    results: &[CategoryResult],
    produced: &HashMap<String, RecordSet>,
) -> Result<()> {
    fs::create_dir_all(output.reports_dir)
        .with_context(|| format!("Failed to create {}", output.reports_dir))?;

    let summary = Summary::build(results, produced);
    let date = Local::now().format("%Y%m%d");

    let json_path = PathBuf::from(output.reports_dir).join(format!("ipl_stats_summary_{}.json", date));
    let json = serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?;
    fs::write(&json_path, json)
        .with_context(|| format!("Failed to write {}", json_path.display()))?;
    info!("Summary report saved to {}", json_path.display());

    let html_path = PathBuf::from(output.reports_dir).join(format!("ipl_stats_report_{}.html", date));
    fs::write(&html_path, render_html(&summary))
        .with_context(|| format!("Failed to write {}", html_path.display()))?;
    info!("HTML report saved to {}", html_path.display());

    Ok(())
}

/// Rebuilds the report from persisted snapshots, without scraping.
///
/// Useful after a partial run: whatever made it into the cache counts as a
/// success, everything else is reported as missing.
pub struct ReportService {
    config: AppConfig,
}

impl ReportService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<()> {
        info!("=== Generating Report From Cache ===\n");

        let cache = Cache::new(self.config.output.cache_dir)?;

        let mut results = Vec::new();
        let mut produced = HashMap::new();
        for category in get_categories() {
            let snapshot = cache.load_snapshot(category.slug)?;
            let success = snapshot.is_some();
            if let Some(set) = snapshot {
                produced.insert(set.category.clone(), set);
            }
            results.push(CategoryResult {
                slug: category.slug.to_string(),
                group: category.group,
                success,
                file: None,
                failed_strategy: None,
            });
        }

        write_reports(&self.config.output, &results, &produced)?;

        info!("=== Report Complete ===");
        Ok(())
    }
}
