use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::RecordSet;

/// File-based JSON store for extracted record sets, keyed by category slug.
///
/// Written once per successful category at the end of its processing; read
/// back on the next run to seed the fallback-derivation strategy. The
/// directory is created explicitly here, never as an import-time side effect.
pub struct Cache {
    snapshots_dir: PathBuf,
}

impl Cache {
    pub fn new<P: AsRef<Path>>(cache_dir: P) -> Result<Self> {
        let snapshots_dir = cache_dir.as_ref().join("snapshots");
        fs::create_dir_all(&snapshots_dir).context("Failed to create snapshot cache directory")?;
        Ok(Self { snapshots_dir })
    }

    /// Save a record set snapshot under its category slug
    pub fn save_snapshot(&self, set: &RecordSet) -> Result<()> {
        let file_path = self.build_path(&set.category);
        self.write_json(&file_path, set)?;
        info!("Saved snapshot to cache: {}", file_path.display());
        Ok(())
    }

    /// Load a category's snapshot, if one was persisted before
    pub fn load_snapshot(&self, slug: &str) -> Result<Option<RecordSet>> {
        self.read_json_opt(&self.build_path(slug))
    }

    // --- Helper Methods ---

    fn build_path(&self, slug: &str) -> PathBuf {
        self.snapshots_dir.join(format!("{}.json", slug))
    }

    fn write_json<T: Serialize>(&self, path: &Path, data: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(data)?;
        fs::write(path, json).context("Failed to write cache file")?;
        Ok(())
    }

    fn read_json_opt<T: for<'de> Deserialize<'de>>(&self, path: &Path) -> Result<Option<T>> {
        if !path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(path)?;
        let data = serde_json::from_str(&json).with_context(|| {
            // Char-based truncation; byte slicing could split a multibyte
            // character in an already-corrupt file
            let preview: String = json.chars().take(200).collect();
            format!("Failed to parse JSON from {:?}. First 200 chars: {}", path, preview)
        })?;
        Ok(Some(data))
    }
}

/// In-memory view of the persisted snapshots, loaded once at run start.
///
/// Treated as read-only for the whole run: the derivation strategy only ever
/// sees what was on disk before any category started, so concurrent category
/// workers need no locking discipline.
#[derive(Default)]
pub struct SnapshotStore {
    sets: HashMap<String, RecordSet>,
}

impl SnapshotStore {
    /// Load every known category's snapshot from the cache
    pub fn load(cache: &Cache, slugs: &[&str]) -> Result<Self> {
        let mut store = Self::default();
        for slug in slugs {
            if let Some(set) = cache.load_snapshot(slug)? {
                info!("Loaded {} snapshot ({} records)", slug, set.len());
                store.insert(set);
            }
        }
        Ok(store)
    }

    pub fn insert(&mut self, set: RecordSet) {
        self.sets.insert(set.category.clone(), set);
    }

    pub fn get(&self, slug: &str) -> Option<&RecordSet> {
        self.sets.get(slug)
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MetricValue, Record};

    fn temp_cache(tag: &str) -> (PathBuf, Cache) {
        let dir = std::env::temp_dir().join(format!("ipl_stats_scraper_cache_{}", tag));
        let _ = fs::remove_dir_all(&dir);
        let cache = Cache::new(&dir).unwrap();
        (dir, cache)
    }

    fn sample_set() -> RecordSet {
        let mut set = RecordSet::new("most-runs");
        set.push(Record {
            rank: 1,
            identity: "Jane Doe".to_string(),
            team: "Example Team".to_string(),
            metrics: vec![("Runs".to_string(), MetricValue::Count(400))],
        });
        set
    }

    #[test]
    fn saved_snapshot_round_trips_into_the_store() {
        let (_dir, cache) = temp_cache("roundtrip");
        cache.save_snapshot(&sample_set()).unwrap();

        let store = SnapshotStore::load(&cache, &["most-runs", "most-wickets"]).unwrap();
        assert_eq!(store.len(), 1);
        assert!(!store.is_empty());
        assert_eq!(store.get("most-runs").unwrap().len(), 1);
        assert!(store.get("most-wickets").is_none());
    }

    #[test]
    fn missing_snapshot_is_none_not_error() {
        let (_dir, cache) = temp_cache("missing");
        assert!(cache.load_snapshot("most-runs").unwrap().is_none());
        let store = SnapshotStore::load(&cache, &["most-runs"]).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn corrupt_snapshot_reports_an_error_without_panicking() {
        let (dir, cache) = temp_cache("corrupt");
        // Multibyte text sized so a 200-byte cut would land mid-character
        let garbled = format!("x{}", "ą".repeat(200));
        fs::write(dir.join("snapshots").join("most-runs.json"), &garbled).unwrap();
        assert!(cache.load_snapshot("most-runs").is_err());
    }
}
