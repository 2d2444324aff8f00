use anyhow::{Context, Result};
use regex::Regex;

use crate::domain::{CandidateRecord, FieldKind, RecordSchema};

use super::text::PageText;

/// Whole-page regex pass.
///
/// One schema-derived pattern is applied to the whitespace-normalized page
/// text; every match becomes exactly one candidate with positional field
/// assignment. Zero matches is the expected outcome when the source markup
/// changed, not an error. Group boundaries are never corrected here — a team
/// name bleeding into the player capture is left for the plausibility filter.
pub struct RegexStrategy;

impl RegexStrategy {
    pub fn extract(page: &PageText, schema: &RecordSchema) -> Result<Vec<CandidateRecord>> {
        let regex = Self::compile(schema)?;
        let text = page.normalized();

        let candidates = regex
            .captures_iter(&text)
            .map(|caps| {
                let values = caps
                    .iter()
                    .skip(1)
                    .map(|g| g.map(|m| m.as_str().trim().to_string()).unwrap_or_default())
                    .collect();
                CandidateRecord::new(values)
            })
            .collect();

        Ok(candidates)
    }

    fn compile(schema: &RecordSchema) -> Result<Regex> {
        let pattern = Self::build_pattern(schema);
        Regex::new(&pattern).context("Failed to compile schema pattern")
    }

    /// Rank digits, player and team as letter/space runs, then one numeric
    /// group per metric column in schema order
    fn build_pattern(schema: &RecordSchema) -> String {
        let mut pattern = String::from(r"(\d+)\s+([A-Za-z][A-Za-z\s]+)\s+([A-Za-z][A-Za-z\s]+)");
        for field in schema.numeric_fields() {
            match field.kind {
                FieldKind::Count => pattern.push_str(r"\s+(\d+\*?)"),
                FieldKind::Rate => pattern.push_str(r"\s+([\d\.]+)"),
                _ => unreachable!("numeric_fields yields only metric kinds"),
            }
        }
        pattern
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FieldSpec, RecordSchema};

    fn schema() -> RecordSchema {
        RecordSchema::new(
            vec![
                FieldSpec::new("Rank", FieldKind::Rank),
                FieldSpec::new("Player", FieldKind::Identity),
                FieldSpec::new("Team", FieldKind::Team),
                FieldSpec::new("Mat", FieldKind::Count),
                FieldSpec::new("Runs", FieldKind::Count),
                FieldSpec::new("Avg", FieldKind::Rate),
            ],
            "Runs",
            10.0..=1000.0,
        )
    }

    #[test]
    fn one_candidate_per_match_with_positional_fields() {
        let page = PageText::new("1 Jane Doe Example Team 10 250 41.66 noise 2 Amy Poe Other Side 9 231 33.0");
        let candidates = RegexStrategy::extract(&page, &schema()).unwrap();
        assert_eq!(candidates.len(), 2);
        for candidate in &candidates {
            assert_eq!(candidate.values.len(), schema().fields().len());
        }
        assert_eq!(candidates[0].values[0], "1");
        assert_eq!(candidates[0].values[3], "10");
        assert_eq!(candidates[0].values[4], "250");
        assert_eq!(candidates[0].values[5], "41.66");
    }

    #[test]
    fn greedy_name_groups_may_bleed_and_are_left_uncorrected() {
        // The pattern cannot know where the player name ends and the team
        // begins; the plausibility filter owns rejecting the bad split.
        let page = PageText::new("1 Jane Doe Example Team 10 250 41.66");
        let candidates = RegexStrategy::extract(&page, &schema()).unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].values[1], "Jane Doe Example");
        assert_eq!(candidates[0].values[2], "Team");
    }

    #[test]
    fn zero_matches_is_not_an_error() {
        let page = PageText::new("nothing tabular here");
        let candidates = RegexStrategy::extract(&page, &schema()).unwrap();
        assert!(candidates.is_empty());
    }

    #[test]
    fn running_twice_yields_identical_output() {
        let page = PageText::new("1 Jane Doe Example Team 10 250 41.66");
        let first = RegexStrategy::extract(&page, &schema()).unwrap();
        let second = RegexStrategy::extract(&page, &schema()).unwrap();
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.values, b.values);
        }
    }
}
