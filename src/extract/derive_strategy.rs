use log::debug;

use crate::cache::SnapshotStore;
use crate::config::CategoryConfig;
use crate::domain::{Record, RecordSet};
use crate::errors::ExtractError;

/// Last-resort derivation from a previously persisted, richer record set.
///
/// A category whose columns are a strict subset of a richer category (most
/// hundreds out of the most-runs table, say) can be rebuilt offline: project
/// the requested columns, stable-sort descending by the target metric, and
/// renumber. Having no usable parent snapshot is a normal outcome, reported
/// as `SchemaUnsatisfiable`, never a crash.
pub struct DeriveStrategy<'a> {
    store: &'a SnapshotStore,
}

impl<'a> DeriveStrategy<'a> {
    pub fn new(store: &'a SnapshotStore) -> Self {
        Self { store }
    }

    pub fn derive(&self, category: &CategoryConfig) -> Result<RecordSet, ExtractError> {
        let target = category.schema.headline_metric();

        let parent_slug = category.derived_from.ok_or_else(|| Self::unsatisfiable(target))?;
        let parent = self
            .store
            .get(parent_slug)
            .ok_or_else(|| Self::unsatisfiable(target))?;

        if !parent.satisfies(&category.schema) {
            return Err(Self::unsatisfiable(target));
        }

        debug!(
            "Deriving {} from persisted {} snapshot ({} records)",
            category.slug,
            parent_slug,
            parent.len()
        );

        let mut set = RecordSet::new(category.slug);
        for record in &parent.records {
            set.push(self.project(record, category));
        }

        // Stable sort keeps the parent's relative order on ties
        set.records.sort_by(|a, b| {
            let a_val = a.metric(target).map(|v| v.as_f64()).unwrap_or(0.0);
            let b_val = b.metric(target).map(|v| v.as_f64()).unwrap_or(0.0);
            b_val.total_cmp(&a_val)
        });

        set.finalize();
        Ok(set)
    }

    /// Keep identity and team, copy only the columns the schema asks for
    fn project(&self, record: &Record, category: &CategoryConfig) -> Record {
        let metrics = category
            .schema
            .numeric_fields()
            .filter_map(|f| record.metric(f.name).map(|v| (f.name.to_string(), v)))
            .collect();

        Record {
            rank: 0,
            identity: record.identity.clone(),
            team: record.team.clone(),
            metrics,
        }
    }

    fn unsatisfiable(field: &str) -> ExtractError {
        ExtractError::SchemaUnsatisfiable {
            field: field.to_string(),
        }
    }
}
