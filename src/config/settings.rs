pub struct ScraperSettings {
    pub rate_limit_ms: u64,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
    pub stats_base_url: &'static str,
    pub points_table_url: &'static str,
    pub teams_base_url: &'static str,
    /// Politeness bound on concurrent category fetches
    pub max_workers: usize,
}

impl Default for ScraperSettings {
    fn default() -> Self {
        Self {
            rate_limit_ms: 1000,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36",
            timeout_secs: 30,
            stats_base_url: "https://indianexpress.com/section/sports/ipl/stats",
            points_table_url: "https://www.iplt20.com/points-table/men",
            teams_base_url: "https://www.iplt20.com/teams",
            max_workers: 5,
        }
    }
}

pub struct OutputSettings {
    pub batting_dir: &'static str,
    pub bowling_dir: &'static str,
    pub points_table_dir: &'static str,
    pub player_images_dir: &'static str,
    pub debug_dir: &'static str,
    pub reports_dir: &'static str,
    pub cache_dir: &'static str,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            batting_dir: "batting_stats",
            bowling_dir: "bowling_stats",
            points_table_dir: "points_table",
            player_images_dir: "player_images",
            debug_dir: "debug_files",
            reports_dir: "reports",
            cache_dir: "cache",
        }
    }
}

pub struct AppConfig {
    pub scraper: ScraperSettings,
    pub output: OutputSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            scraper: ScraperSettings::default(),
            output: OutputSettings::default(),
        }
    }
}
