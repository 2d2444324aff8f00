use anyhow::{Context, Result};
use chrono::Local;
use colored::Colorize;
use log::{error, info, warn};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::teams::team_slugs;
use crate::config::AppConfig;
use crate::fetchers::{PlayerCard, PlayerImagesFetcher, TeamRoster};

/// Per-team download record persisted next to the images
#[derive(Debug, Serialize)]
struct TeamImagesSummary {
    team: String,
    scraping_date: String,
    players_found: usize,
    images_saved: usize,
    players: Vec<PlayerCard>,
}

/// Downloads player headshots from every franchise page into per-team
/// folders. Teams are processed sequentially on one client, so the rate
/// limiter paces every page and image request.
pub struct PlayerImagesService {
    config: AppConfig,
}

impl PlayerImagesService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub async fn run(&self) -> Result<()> {
        info!("=== Starting Player Images Scrape ===\n");

        for dir in [self.config.output.player_images_dir, self.config.output.debug_dir] {
            fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir))?;
        }

        let mut fetcher = PlayerImagesFetcher::from_settings(&self.config.scraper)?;
        for slug in team_slugs() {
            if let Err(e) = self.process_team(&mut fetcher, slug).await {
                error!("{}: {:#}", slug, e);
                println!("{}", format!("Error scraping {}: {:#}", slug, e).red());
            }
        }

        info!("=== Player Images Complete ===");
        Ok(())
    }

    async fn process_team(&self, fetcher: &mut PlayerImagesFetcher, slug: &str) -> Result<()> {
        println!("{}", format!("===== Scraping {} roster =====", slug).cyan());

        let roster = fetcher.fetch_team(slug).await?;
        self.write_debug_dump(slug, &roster)?;

        if roster.cards.is_empty() {
            println!("{}", format!("No player cards found for {}", slug).yellow());
            return Ok(());
        }

        let team_dir = PathBuf::from(self.config.output.player_images_dir).join(slug);
        fs::create_dir_all(&team_dir)
            .with_context(|| format!("Failed to create {}", team_dir.display()))?;

        let mut saved = 0;
        for card in &roster.cards {
            match Self::save_image(fetcher, &team_dir, card).await {
                Ok(()) => saved += 1,
                Err(e) => warn!("{}: image for {} failed: {:#}", slug, card.name, e),
            }
        }

        println!(
            "{}",
            format!(
                "Saved {} of {} player images for {}",
                saved,
                roster.cards.len(),
                slug
            )
            .green()
        );

        self.write_summary(&team_dir, slug, &roster.cards, saved)
    }

    /// An image already on disk counts as saved; reruns only fetch gaps
    async fn save_image(
        fetcher: &mut PlayerImagesFetcher,
        team_dir: &Path,
        card: &PlayerCard,
    ) -> Result<()> {
        let path = team_dir.join(card.file_name());
        if path.exists() {
            info!("Image for {} already present, skipping", card.name);
            return Ok(());
        }

        let bytes = fetcher.download(card).await?;
        fs::write(&path, bytes).with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Saved image for {} to {}", card.name, path.display());
        Ok(())
    }

    fn write_debug_dump(&self, slug: &str, roster: &TeamRoster) -> Result<()> {
        let path =
            PathBuf::from(self.config.output.debug_dir).join(format!("roster_{}.html", slug));
        fs::write(&path, &roster.html)
            .with_context(|| format!("Failed to write {}", path.display()))
    }

    fn write_summary(
        &self,
        team_dir: &Path,
        slug: &str,
        cards: &[PlayerCard],
        saved: usize,
    ) -> Result<()> {
        let summary = TeamImagesSummary {
            team: slug.to_string(),
            scraping_date: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            players_found: cards.len(),
            images_saved: saved,
            players: cards.to_vec(),
        };

        let path = team_dir.join(format!(
            "download_summary_{}.json",
            Local::now().format("%Y%m%d")
        ));
        let json = serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?;
        fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Summary saved to {}", path.display());
        Ok(())
    }
}
