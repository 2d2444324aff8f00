use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "IPL statistics scraper")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Scrape the statistic leaderboards and save them as CSV
    Stats {
        /// Scrape a single category (e.g. most-runs); default is all
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Scrape the league points table
    PointsTable,
    /// Download player headshots for every franchise
    PlayerImages,
    /// Regenerate the summary report from cached snapshots
    Report,
    /// Scrape stats and the points table in one go
    All,
}
