pub mod structs;

pub use structs::{Cache, SnapshotStore};
