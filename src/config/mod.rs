pub mod categories;
pub mod filter_lists;
pub mod settings;
pub mod teams;

pub use categories::{find_category, get_categories, CategoryConfig, StatGroup};
pub use settings::AppConfig;
