use anyhow::Result;

use ipl_stats_scraper::cli::Command;
use ipl_stats_scraper::{
    handle_all, handle_player_images, handle_points_table, handle_report, handle_stats, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Stats { category } => handle_stats(category.as_deref()),
        Command::PointsTable => handle_points_table(),
        Command::PlayerImages => handle_player_images(),
        Command::Report => handle_report(),
        Command::All => handle_all(),
    }
}
