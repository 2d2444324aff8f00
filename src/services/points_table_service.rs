use anyhow::{Context, Result};
use chrono::Local;
use colored::Colorize;
use log::info;
use std::fs;
use std::path::PathBuf;

use crate::config::AppConfig;
use crate::export::csv_writer;
use crate::fetchers::{PointsTable, PointsTableFetcher};

/// Scrapes the league standings table and saves it as a dated CSV
pub struct PointsTableService {
    config: AppConfig,
}

impl PointsTableService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub async fn run(&self) -> Result<()> {
        info!("=== Starting Points Table Scrape ===\n");
        println!("{}", "===== Scraping points table =====".cyan());

        let dir = self.config.output.points_table_dir;
        fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir))?;

        let mut fetcher = PointsTableFetcher::from_settings(&self.config.scraper)?;
        match fetcher.fetch().await? {
            Some(table) => self.save(&table)?,
            None => println!("{}", "No points table data available yet".yellow()),
        }

        info!("=== Points Table Complete ===");
        Ok(())
    }

    fn save(&self, table: &PointsTable) -> Result<()> {
        let file_name = format!("ipl_points_table_{}.csv", Local::now().format("%Y%m%d"));
        let path = PathBuf::from(self.config.output.points_table_dir).join(file_name);

        csv_writer::write_points_table(&path, table)?;

        println!(
            "{}",
            format!("Scraped points table with {} team entries", table.len()).green()
        );
        for row in table.rows.iter().take(5) {
            println!("  {}", row.join(" | "));
        }
        Ok(())
    }
}
