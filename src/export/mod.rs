pub mod csv_writer;
pub mod report;

pub use report::{CategoryResult, Summary};
