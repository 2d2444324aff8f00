use serde::{Deserialize, Serialize};

use super::schema::RecordSchema;

/// Raw, untrusted field values produced by an extraction strategy.
///
/// Values are positional: rank, identity, team, then one entry per numeric
/// schema field. Nothing here has passed the plausibility filter yet.
#[derive(Debug, Clone)]
pub struct CandidateRecord {
    pub values: Vec<String>,
}

impl CandidateRecord {
    pub fn new(values: Vec<String>) -> Self {
        Self { values }
    }
}

/// A numeric metric value after validation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Count(u64),
    Rate(f64),
}

impl MetricValue {
    pub fn as_f64(&self) -> f64 {
        match self {
            MetricValue::Count(n) => *n as f64,
            MetricValue::Rate(r) => *r,
        }
    }
}

impl std::fmt::Display for MetricValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetricValue::Count(n) => write!(f, "{}", n),
            MetricValue::Rate(r) => write!(f, "{}", r),
        }
    }
}

/// A validated leaderboard row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub rank: u32,
    pub identity: String,
    pub team: String,
    /// Metric name → value, kept in schema order
    pub metrics: Vec<(String, MetricValue)>,
}

impl Record {
    pub fn metric(&self, name: &str) -> Option<MetricValue> {
        self.metrics
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
    }
}

/// Ordered set of records extracted for one category from one document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordSet {
    pub category: String,
    pub records: Vec<Record>,
}

impl RecordSet {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            records: Vec::new(),
        }
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drop repeated identities (first occurrence wins) and renumber ranks so
    /// they form the contiguous sequence 1..=N.
    pub fn finalize(&mut self) {
        let mut seen = std::collections::HashSet::new();
        self.records.retain(|r| seen.insert(r.identity.clone()));
        self.renumber();
    }

    fn renumber(&mut self) {
        for (idx, record) in self.records.iter_mut().enumerate() {
            record.rank = (idx + 1) as u32;
        }
    }

    /// Whether this set carries every column the given schema asks for
    pub fn satisfies(&self, schema: &RecordSchema) -> bool {
        let Some(first) = self.records.first() else {
            return false;
        };
        schema
            .numeric_fields()
            .all(|f| first.metric(f.name).is_some())
    }
}
