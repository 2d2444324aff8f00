pub mod derive_strategy;
pub mod heuristic_strategy;
pub mod plausibility;
pub mod regex_strategy;
pub mod text;

use log::{debug, info, warn};

use crate::cache::SnapshotStore;
use crate::config::CategoryConfig;
use crate::domain::{CandidateRecord, FieldKind, MetricValue, Record, RecordSchema, RecordSet};
use crate::errors::ExtractError;

pub use plausibility::{NameRole, PlausibilityFilter};
pub use text::PageText;

use derive_strategy::DeriveStrategy;
use heuristic_strategy::HeuristicStrategy;
use regex_strategy::RegexStrategy;

/// The three extraction strategies, in fallback order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Regex,
    Heuristic,
    Derivation,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Regex => "regex",
            Strategy::Heuristic => "positional-heuristic",
            Strategy::Derivation => "fallback-derivation",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal result for one category. Nothing partial crosses this boundary.
#[derive(Debug)]
pub enum ExtractionOutcome {
    Success(RecordSet),
    Failed { last_strategy: Strategy },
}

/// Orchestration states. Each non-terminal state attempts exactly one
/// strategy; an empty result advances, a non-empty one terminates. No state
/// is retried and there are no backward transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    NotStarted,
    RegexAttempted,
    HeuristicAttempted,
    FallbackAttempted,
}

/// Generic leaderboard extractor, parameterized by the category's schema.
///
/// Strategy chain: whole-page regex, then the positional line heuristic, then
/// derivation from a persisted richer snapshot. Every candidate from the text
/// strategies passes through the plausibility filter before promotion;
/// surviving records are deduplicated by player and renumbered.
pub struct Extractor {
    filter: PlausibilityFilter,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor {
    pub fn new() -> Self {
        Self {
            filter: PlausibilityFilter::from_config(),
        }
    }

    pub fn with_filter(filter: PlausibilityFilter) -> Self {
        Self { filter }
    }

    pub fn extract(
        &self,
        page: &PageText,
        category: &CategoryConfig,
        store: &SnapshotStore,
    ) -> ExtractionOutcome {
        if page.is_blank() {
            // Malformed input fails soft, exactly like a no-match
            debug!("{}: empty page text, text strategies will find nothing", category.slug);
        }

        let mut state = State::NotStarted;
        loop {
            let (next_state, result) = match state {
                State::NotStarted => (State::RegexAttempted, self.try_regex(page, category)),
                State::RegexAttempted => {
                    (State::HeuristicAttempted, self.try_heuristic(page, category))
                }
                State::HeuristicAttempted => {
                    (State::FallbackAttempted, self.try_derivation(category, store))
                }
                State::FallbackAttempted => {
                    return ExtractionOutcome::Failed {
                        last_strategy: Strategy::Derivation,
                    };
                }
            };

            state = next_state;
            if let Some(set) = result {
                return ExtractionOutcome::Success(set);
            }
        }
    }

    // --- Strategy Attempts ---

    fn try_regex(&self, page: &PageText, category: &CategoryConfig) -> Option<RecordSet> {
        let candidates = match RegexStrategy::extract(page, &category.schema) {
            Ok(candidates) => candidates,
            Err(e) => {
                warn!("{}: regex strategy unavailable: {:#}", category.slug, e);
                return None;
            }
        };
        self.promote_all(candidates, category, Strategy::Regex)
    }

    fn try_heuristic(&self, page: &PageText, category: &CategoryConfig) -> Option<RecordSet> {
        let candidates = HeuristicStrategy::new(&self.filter).extract(page, &category.schema);
        self.promote_all(candidates, category, Strategy::Heuristic)
    }

    fn try_derivation(&self, category: &CategoryConfig, store: &SnapshotStore) -> Option<RecordSet> {
        match DeriveStrategy::new(store).derive(category) {
            Ok(set) if !set.is_empty() => {
                info!("{}: derived {} records from snapshot", category.slug, set.len());
                Some(set)
            }
            Ok(_) => None,
            Err(e) => {
                debug!("{}: {}", category.slug, e);
                None
            }
        }
    }

    // --- Candidate Promotion ---

    fn promote_all(
        &self,
        candidates: Vec<CandidateRecord>,
        category: &CategoryConfig,
        strategy: Strategy,
    ) -> Option<RecordSet> {
        let total = candidates.len();
        if total == 0 {
            debug!("{}: {} strategy: {}", category.slug, strategy, ExtractError::NoMatchFound);
            return None;
        }

        let mut set = RecordSet::new(category.slug);

        for candidate in candidates {
            match self.promote(candidate, &category.schema) {
                Ok(record) => set.push(record),
                Err(e) => debug!("{}: {}", category.slug, e),
            }
        }

        set.finalize();
        if set.is_empty() {
            debug!(
                "{}: {} strategy kept 0 of {} candidates",
                category.slug, strategy, total
            );
            return None;
        }

        info!(
            "{}: {} strategy kept {} of {} candidates",
            category.slug,
            strategy,
            set.len(),
            total
        );
        Some(set)
    }

    /// Validate one candidate against the filter and parse its metrics
    fn promote(
        &self,
        candidate: CandidateRecord,
        schema: &RecordSchema,
    ) -> Result<Record, ExtractError> {
        if candidate.values.len() != schema.fields().len() {
            return Err(ExtractError::MalformedInput(format!(
                "expected {} fields, got {}",
                schema.fields().len(),
                candidate.values.len()
            )));
        }

        let identity = candidate.values[1].trim();
        if !self.filter.plausible_name(identity, NameRole::Identity) {
            return Err(ExtractError::ImplausibleCandidate(identity.to_string()));
        }

        let team = candidate.values[2].trim();
        if !self.filter.plausible_name(team, NameRole::Team) {
            return Err(ExtractError::ImplausibleCandidate(team.to_string()));
        }

        let mut metrics = Vec::new();
        for (field, raw) in schema.fields()[3..].iter().zip(&candidate.values[3..]) {
            let range = (field.name == schema.headline_metric()).then(|| schema.headline_range());
            if !self.filter.plausible_metric(raw, range) {
                return Err(ExtractError::ImplausibleCandidate(format!(
                    "{}={}",
                    field.name, raw
                )));
            }
            metrics.push((field.name.to_string(), Self::parse_metric(raw, field.kind)?));
        }

        Ok(Record {
            rank: 0,
            identity: identity.to_string(),
            team: team.to_string(),
            metrics,
        })
    }

    fn parse_metric(raw: &str, kind: FieldKind) -> Result<MetricValue, ExtractError> {
        let cleaned = raw.trim().trim_end_matches('*');
        let parse_err = || ExtractError::ImplausibleCandidate(raw.to_string());
        match kind {
            FieldKind::Count => cleaned
                .parse::<u64>()
                .map(MetricValue::Count)
                .map_err(|_| parse_err()),
            FieldKind::Rate => cleaned
                .parse::<f64>()
                .map(MetricValue::Rate)
                .map_err(|_| parse_err()),
            _ => Err(parse_err()),
        }
    }
}
