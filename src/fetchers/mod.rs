pub mod player_images;
pub mod points_table;
pub mod stats_page;

pub use player_images::{PlayerCard, PlayerImagesFetcher, TeamRoster};
pub use points_table::{PointsTable, PointsTableFetcher};
pub use stats_page::{FetchedPage, StatsPageFetcher};
