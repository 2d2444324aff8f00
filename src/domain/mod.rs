pub mod models;
pub mod schema;

pub use models::{CandidateRecord, MetricValue, Record, RecordSet};
pub use schema::{FieldKind, FieldSpec, RecordSchema};
