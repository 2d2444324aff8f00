pub mod cache;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod export;
pub mod extract;
pub mod fetchers;
pub mod http;
pub mod rate_limiter;
pub mod services;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use crate::cli::Command;
use crate::config::AppConfig;
use crate::services::{PlayerImagesService, PointsTableService, ReportService, StatsService};

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_stats(category: Option<&str>) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = StatsService::new(config);
        service.run(category).await
    })
}

pub fn handle_points_table() -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = PointsTableService::new(config);
        service.run().await
    })
}

pub fn handle_player_images() -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = PlayerImagesService::new(config);
        service.run().await
    })
}

pub fn handle_report() -> Result<()> {
    let config = AppConfig::new();
    let service = ReportService::new(config);
    service.run()
}

pub fn handle_all() -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let stats = StatsService::new(AppConfig::new());
        stats.run(None).await?;

        let points = PointsTableService::new(AppConfig::new());
        points.run().await
    })
}
