use std::ops::RangeInclusive;

use crate::config::filter_lists;

/// Which name column a candidate string is being judged as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameRole {
    Identity,
    Team,
}

const IDENTITY_LEN: RangeInclusive<usize> = 3..=40;
const TEAM_LEN: RangeInclusive<usize> = 3..=70;

/// Pure predicate deciding whether a raw string plausibly denotes a player
/// name, a team name, or a metric value, as opposed to page furniture.
///
/// The word lists are injected so the logic here stays data-independent.
/// Deliberately permissive-leaning: junk that slips through is caught by
/// deduplication and review downstream, a real record dropped here is gone.
pub struct PlausibilityFilter {
    denylist: Vec<String>,
    surnames: Vec<String>,
}

impl PlausibilityFilter {
    pub fn new(denylist: Vec<&str>, surnames: Vec<&str>) -> Self {
        Self {
            denylist: denylist.iter().map(|s| s.to_lowercase()).collect(),
            surnames: surnames.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Filter backed by the crate's configured word lists
    pub fn from_config() -> Self {
        Self::new(filter_lists::denylist(), filter_lists::surname_allowlist())
    }

    /// Does this string plausibly denote a person or team name?
    pub fn plausible_name(&self, candidate: &str, role: NameRole) -> bool {
        let candidate = candidate.trim();

        if !self.length_ok(candidate, role) {
            return false;
        }
        if self.contains_denied_keyword(candidate) {
            return false;
        }
        if self.contains_known_surname(candidate) {
            return true;
        }
        Self::looks_name_cased(candidate)
    }

    /// Does this string parse as a metric value, inside the plausible range
    /// when one is declared for the column?
    pub fn plausible_metric(&self, candidate: &str, range: Option<&RangeInclusive<f64>>) -> bool {
        // Trailing star marks a not-out high score
        let cleaned = candidate.trim().trim_end_matches('*');

        if cleaned.is_empty() || !cleaned.chars().all(|c| c.is_ascii_digit() || c == '.') {
            return false;
        }
        let Ok(value) = cleaned.parse::<f64>() else {
            return false;
        };
        match range {
            Some(range) => range.contains(&value),
            None => true,
        }
    }

    // --- Name Heuristics ---

    fn length_ok(&self, candidate: &str, role: NameRole) -> bool {
        let bounds = match role {
            NameRole::Identity => IDENTITY_LEN,
            NameRole::Team => TEAM_LEN,
        };
        bounds.contains(&candidate.chars().count())
    }

    fn contains_denied_keyword(&self, candidate: &str) -> bool {
        let lower = candidate.to_lowercase();
        self.denylist.iter().any(|k| lower.contains(k.as_str()))
    }

    fn contains_known_surname(&self, candidate: &str) -> bool {
        self.surnames.iter().any(|s| candidate.contains(s.as_str()))
    }

    /// At least two whitespace tokens, each starting with an uppercase letter
    fn looks_name_cased(candidate: &str) -> bool {
        let tokens: Vec<&str> = candidate.split_whitespace().collect();
        tokens.len() >= 2
            && tokens
                .iter()
                .all(|t| t.chars().next().is_some_and(|c| c.is_uppercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter() -> PlausibilityFilter {
        PlausibilityFilter::from_config()
    }

    #[test]
    fn rejects_too_short_and_too_long_identities() {
        let f = filter();
        assert!(!f.plausible_name("AB", NameRole::Identity));
        let long = "A".repeat(41);
        assert!(!f.plausible_name(&long, NameRole::Identity));
    }

    #[test]
    fn rejects_bare_denylist_keyword() {
        let f = filter();
        assert!(!f.plausible_name("batting", NameRole::Identity));
        assert!(!f.plausible_name("Most Runs", NameRole::Identity));
        assert!(!f.plausible_name("Points Table", NameRole::Team));
    }

    #[test]
    fn accepts_name_cased_strings() {
        let f = filter();
        assert!(f.plausible_name("Jane Doe", NameRole::Identity));
        assert!(f.plausible_name("Example Team", NameRole::Team));
        assert!(!f.plausible_name("lowercase name", NameRole::Identity));
        assert!(!f.plausible_name("Singleword", NameRole::Identity));
    }

    #[test]
    fn allowlisted_surname_bypasses_casing_heuristic() {
        let f = filter();
        // Single token would normally fail the two-token rule
        assert!(f.plausible_name("Kohli", NameRole::Identity));
    }

    #[test]
    fn team_length_bound_is_wider_than_identity() {
        let f = filter();
        let fifty = "Long Team Name Padded Out To Fifty Characters Here";
        assert_eq!(fifty.len(), 50);
        assert!(f.plausible_name(fifty, NameRole::Team));
        assert!(!f.plausible_name(fifty, NameRole::Identity));
    }

    #[test]
    fn metric_parsing_and_range() {
        let f = filter();
        assert!(f.plausible_metric("250", Some(&(10.0..=1000.0))));
        assert!(!f.plausible_metric("5", Some(&(10.0..=1000.0))));
        assert!(!f.plausible_metric("1200", Some(&(10.0..=1000.0))));
        assert!(f.plausible_metric("98*", None));
        assert!(f.plausible_metric("7.95", None));
        assert!(!f.plausible_metric("-3", None));
        assert!(!f.plausible_metric("abc", None));
    }
}
