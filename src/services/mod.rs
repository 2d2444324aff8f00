pub mod player_images_service;
pub mod points_table_service;
pub mod report_service;
pub mod stats_service;

pub use player_images_service::PlayerImagesService;
pub use points_table_service::PointsTableService;
pub use report_service::ReportService;
pub use stats_service::StatsService;
